use camview_core::camera::CameraProfile;
use camview_core::interaction::ProjectionAxis;
use camview_core::replay::StepOutcome;
use camview_core::session::DisplaySession;
use console::Style;
use kurbo::{Point, Rect};

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
        }
    }
}

fn print_title(s: &Styles, title: &str) {
    println!();
    println!("  {}", s.title.apply_to(title));
    println!(
        "  {}",
        s.title.apply_to("\u{2550}".repeat(title.chars().count()))
    );
    println!();
}

fn fmt_rect(r: Rect) -> String {
    format!(
        "({:.2}, {:.2}) {:.2} x {:.2}",
        r.x0,
        r.y0,
        r.width(),
        r.height()
    )
}

fn fmt_point(p: Point) -> String {
    format!("({:.2}, {:.2})", p.x, p.y)
}

fn print_geometry(s: &Styles, session: &DisplaySession) {
    println!(
        "  {:<14}{}",
        s.label.apply_to("Sensor"),
        s.value.apply_to(session.sensor())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Orientation"),
        s.method.apply_to(session.orientation())
    );
    let panel = session.panel();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Panel"),
        s.value.apply_to(format!("{} x {}", panel.width, panel.height))
    );
    println!();
}

fn print_viewport(s: &Styles, session: &DisplaySession) {
    println!("  {}", s.header.apply_to("Viewport"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Requested"),
        s.value.apply_to(fmt_rect(session.zoom_rect().absolute()))
    );
    match (
        session.visible_display(),
        session.zoom_factor(),
        session.draw_rect(),
    ) {
        (Some(visible), Some(zoom), Some(draw)) => {
            println!(
                "    {:<12}{}",
                s.label.apply_to("Visible"),
                s.value.apply_to(fmt_rect(visible))
            );
            println!(
                "    {:<12}{}",
                s.label.apply_to("Zoom"),
                s.value.apply_to(format!("{zoom:.4}"))
            );
            println!(
                "    {:<12}{}",
                s.label.apply_to("Draw"),
                s.value.apply_to(fmt_rect(draw))
            );
        }
        _ => println!(
            "    {:<12}{}",
            s.label.apply_to("Visible"),
            s.disabled.apply_to("panel not ready")
        ),
    }
    println!();
}

fn print_entities(s: &Styles, session: &DisplaySession) {
    let g = session.geometry();
    println!("  {}", s.header.apply_to("ROI"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Absolute"),
        s.value.apply_to(fmt_rect(session.roi().absolute()))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Display"),
        s.value.apply_to(fmt_rect(session.roi().display(g)))
    );
    println!();

    println!("  {}", s.header.apply_to("Markers"));
    for (i, marker) in session.markers().iter().enumerate() {
        println!(
            "    {:<12}{}",
            s.label.apply_to(format!("{}", i + 1)),
            s.value.apply_to(fmt_point(marker.absolute()))
        );
    }
    println!();

    println!("  {}", s.header.apply_to("Projection markers"));
    for (i, marker) in session.proj_markers().iter().enumerate() {
        println!(
            "    {:<12}{}",
            s.label.apply_to(format!("{}", i + 1)),
            s.value.apply_to(fmt_point(marker.absolute()))
        );
    }
    for axis in [ProjectionAxis::Horizontal, ProjectionAxis::Vertical] {
        let mode = match session.projection_mode(axis) {
            Some(i) => s.method.apply_to(format!("marker {}", i + 1)),
            None => s.disabled.apply_to("off".to_string()),
        };
        println!("    {:<12}{}", s.label.apply_to(axis), mode);
    }
    println!();
}

pub fn print_fit_summary(session: &DisplaySession) {
    let s = Styles::new();
    print_title(&s, "Viewport Fit");
    print_geometry(&s, session);
    print_viewport(&s, session);
}

pub fn print_map_summary(session: &DisplaySession, panel: Point, display: Point, absolute: Point) {
    let s = Styles::new();
    print_title(&s, "Pointer Mapping");
    print_geometry(&s, session);
    println!(
        "  {:<14}{}",
        s.label.apply_to("Panel"),
        s.value.apply_to(fmt_point(panel))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Display"),
        s.value.apply_to(fmt_point(display))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Absolute"),
        s.value.apply_to(fmt_point(absolute))
    );
    println!();
}

pub fn print_camera_summary(profile: &CameraProfile, reported_bits: Option<u32>) {
    let s = Styles::new();
    let kind = profile.kind;
    print_title(&s, "Camera");

    println!(
        "  {:<14}{}",
        s.label.apply_to("Kind"),
        s.method.apply_to(kind)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Colour"),
        s.value.apply_to(if kind.is_color() { "yes" } else { "no" })
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Scale"),
        s.value.apply_to(kind.image_scale())
    );
    let bits = profile.bit_depth(reported_bits);
    println!(
        "  {:<14}{}",
        s.label.apply_to("Bit depth"),
        s.value.apply_to(format!("{bits} (max {})", profile.max_value(reported_bits)))
    );
    println!();

    println!("  {}", s.header.apply_to("PVs"));
    println!("    {:<12}{}", s.label.apply_to("Rows"), kind.rows_pv());
    println!("    {:<12}{}", s.label.apply_to("Columns"), kind.cols_pv());
    match kind.bit_depth_pv() {
        Some(pv) => println!("    {:<12}{}", s.label.apply_to("Bits"), pv),
        None => println!(
            "    {:<12}{}",
            s.label.apply_to("Bits"),
            s.disabled.apply_to("fixed")
        ),
    }
    if let Some(pv) = kind.shift_pv() {
        println!("    {:<12}{}", s.label.apply_to("Shift"), pv);
    }
    match kind.device_roi_pvs() {
        Some(roi) => println!(
            "    {:<12}{} {} {} {}",
            s.label.apply_to("Device ROI"),
            roi.x,
            roi.y,
            roi.width,
            roi.height
        ),
        None => println!(
            "    {:<12}{}",
            s.label.apply_to("Device ROI"),
            s.disabled.apply_to("none")
        ),
    }
    match profile.droplet_pvs() {
        Some([p1, p2]) => println!("    {:<12}{} {}", s.label.apply_to("Droplet"), p1, p2),
        None => println!(
            "    {:<12}{}",
            s.label.apply_to("Droplet"),
            s.disabled.apply_to("disabled")
        ),
    }
    println!();
}

pub fn print_replay_summary(session: &DisplaySession, outcomes: &[StepOutcome]) {
    let s = Styles::new();
    print_title(&s, "Replay");

    let pointer = outcomes
        .iter()
        .filter(|o| matches!(o, StepOutcome::Pointer(_)))
        .count();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Events"),
        s.value.apply_to(format!(
            "{} ({} pointer, {} command)",
            outcomes.len(),
            pointer,
            outcomes.len() - pointer
        ))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Mode"),
        s.method.apply_to(session.mode())
    );
    println!();

    print_geometry(&s, session);
    print_viewport(&s, session);
    print_entities(&s, session);
}
