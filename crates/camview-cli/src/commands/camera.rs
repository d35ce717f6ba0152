use anyhow::Result;
use camview_core::camera::CameraProfile;
use clap::Args;

#[derive(Args)]
pub struct CameraArgs {
    /// Camera type tag (IC, GE, MCC, LI, LIO, ...)
    pub type_tag: String,

    /// Flag string from the camera list (e.g. "RD")
    #[arg(long, default_value = "")]
    pub flags: String,

    /// First array dimension reported by a GigE camera
    #[arg(long)]
    pub color_planes: Option<u32>,

    /// Bit depth reported by the device, if any
    #[arg(long)]
    pub bits: Option<u32>,
}

pub fn run(args: &CameraArgs) -> Result<()> {
    let profile = CameraProfile::new(&args.type_tag, &args.flags, args.color_planes);
    crate::summary::print_camera_summary(&profile, args.bits);
    Ok(())
}
