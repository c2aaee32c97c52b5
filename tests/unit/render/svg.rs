use super::*;
use crate::foundation::core::{Point, Rect};
use crate::interact::state::HoverTarget;
use crate::render::commands::TextAnchor;

fn frame(commands: Vec<RenderCommand>) -> RenderCommands {
    RenderCommands {
        width: 200.0,
        height: 100.0,
        commands,
    }
}

#[test]
fn document_has_size_and_elements() {
    let svg = write_svg(&frame(vec![
        RenderCommand::Line {
            from: Point::new(0.0, 50.0),
            to: Point::new(200.0, 50.0),
            stroke: Rgba8::rgb(0xd1, 0xd5, 0xdb),
            width: 3.0,
        },
        RenderCommand::Circle {
            center: Point::new(20.5, 50.0),
            radius: 8.0,
            fill: Rgba8::rgb(0xf9, 0x73, 0x16),
            target: Some(HoverTarget::Dot { group: 0 }),
        },
        RenderCommand::Card {
            rect: Rect::new(10.0, 5.0, 150.0, 50.0),
            radius: 10.0,
            fill: Rgba8::rgb(255, 255, 255),
            stroke: Rgba8::rgb(0xd1, 0xd5, 0xdb),
            stroke_width: 2.0,
            target: HoverTarget::Card { group: 0, index: 0 },
        },
    ]));
    assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="100""#));
    assert!(svg.contains(r##"<line x1="0" y1="50" x2="200" y2="50" stroke="#d1d5db" stroke-width="3"/>"##));
    assert!(svg.contains(r##"<circle cx="20.5" cy="50" r="8" fill="#f97316"/>"##));
    assert!(svg.contains(r#"width="140" height="45" rx="10""#));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn text_is_escaped_and_faded() {
    let svg = write_svg(&frame(vec![RenderCommand::Text {
        pos: Point::new(10.0, 20.0),
        text: "R&D <\"beta\">".to_string(),
        size_px: 12.0,
        bold: false,
        fill: Rgba8::rgb(0x37, 0x41, 0x51),
        anchor: TextAnchor::Middle,
        opacity: 0.25,
    }]));
    assert!(svg.contains("R&amp;D &lt;&quot;beta&quot;&gt;"));
    assert!(svg.contains(r#"opacity="0.25""#));
    assert!(svg.contains(r#"text-anchor="middle""#));
    assert!(!svg.contains("font-weight"));
}

#[test]
fn translucent_paint_gets_opacity_attribute() {
    assert_eq!(
        paint("fill", Rgba8 { r: 0, g: 0, b: 0, a: 0x80 }),
        r##" fill="#000000" fill-opacity="0.5""##
    );
}

#[test]
fn numbers_are_compact() {
    assert_eq!(num(3.0), "3");
    assert_eq!(num(422.5), "422.5");
    assert_eq!(num(1.0 / 3.0), "0.33");
    assert_eq!(num(-0.001), "0");
}

#[test]
fn surface_tracks_listeners_and_frames() {
    let mut surface = SvgSurface::new();
    let a = surface.attach(InputChannel::Pointer);
    let b = surface.attach(InputChannel::Wheel);
    assert_ne!(a, b);
    assert_eq!(surface.listener_count(), 2);
    surface.detach(a);
    surface.detach(a);
    assert_eq!(surface.listener_count(), 1);
    assert!(surface.is_listening(InputChannel::Wheel));
    assert!(!surface.is_listening(InputChannel::Pointer));

    assert!(surface.document().is_none());
    surface.present(&frame(vec![])).unwrap();
    assert_eq!(surface.frames_presented(), 1);
    assert!(surface.document().unwrap().contains("<svg"));
}

#[test]
fn rasterizes_solid_rect() {
    let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="2"><rect width="4" height="2" fill="#f97316"/></svg>"##;
    let img = rasterize_svg(svg, None).unwrap();
    assert_eq!((img.width, img.height), (4, 2));
    assert_eq!(img.rgba.len(), 4 * 2 * 4);
    assert_eq!(&img.rgba[..4], &[0xf9, 0x73, 0x16, 0xff]);
}

#[test]
fn invalid_svg_is_an_error() {
    assert!(rasterize_svg("<not svg", None).is_err());
    assert!(rasterize_svg("<svg/>", Some(Path::new("/definitely/missing.ttf"))).is_err());
}
