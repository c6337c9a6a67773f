//! PostScript export of the committed drawing.
//!
//! One page at the canvas pixel size. PostScript puts the origin at the bottom
//! left, so every y coordinate is flipped against the page height.
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use egui::{Color32, Pos2};
use log::info;

use crate::canvas::Canvas;
use crate::error::ExportError;
use crate::primitive::{Primitive, PrimitiveKind};

/// Writes the canvas to `path` as a single-page PostScript document.
///
/// The preview is not exported and the canvas is only read.
pub fn export_postscript(canvas: &Canvas, path: &Path) -> Result<(), ExportError> {
    let (width, height) = page_size(canvas)?;
    let io_err = |source: io::Error| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    write_page(canvas, width, height, &mut out).map_err(io_err)?;
    out.flush().map_err(io_err)?;

    info!(
        "Exported {} primitives ({}x{}) to {}",
        canvas.len(),
        width,
        height,
        path.display()
    );
    Ok(())
}

/// Writes the canvas as PostScript into any writer.
pub fn write_postscript<W: Write>(canvas: &Canvas, out: &mut W) -> Result<(), ExportError> {
    let (width, height) = page_size(canvas)?;
    write_page(canvas, width, height, out).map_err(|source| ExportError::Io {
        path: Default::default(),
        source,
    })
}

fn page_size(canvas: &Canvas) -> Result<(u32, u32), ExportError> {
    let size = canvas.size();
    let width = size.x.round() as u32;
    let height = size.y.round() as u32;
    if width == 0 || height == 0 {
        return Err(ExportError::InvalidPageSize { width, height });
    }
    Ok((width, height))
}

fn write_page<W: Write>(canvas: &Canvas, width: u32, height: u32, out: &mut W) -> io::Result<()> {
    writeln!(out, "%!PS-Adobe-3.0")?;
    writeln!(out, "%%Creator: {} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "%%BoundingBox: 0 0 {width} {height}")?;
    writeln!(out, "%%Pages: 1")?;
    writeln!(out, "%%EndComments")?;
    writeln!(out, "%%BeginSetup")?;
    writeln!(out, "<< /PageSize [{width} {height}] >> setpagedevice")?;
    writeln!(out, "%%EndSetup")?;
    writeln!(out, "%%Page: 1 1")?;
    writeln!(out, "gsave")?;

    set_color(out, canvas.background())?;
    writeln!(out, "0 0 {width} {height} rectfill")?;

    let page_height = height as f32;
    for (_, primitive) in canvas.primitives() {
        write_primitive(out, primitive, page_height)?;
    }

    writeln!(out, "grestore")?;
    writeln!(out, "showpage")?;
    writeln!(out, "%%Trailer")?;
    writeln!(out, "%%EOF")?;
    Ok(())
}

fn write_primitive<W: Write>(
    out: &mut W,
    primitive: &Primitive,
    page_height: f32,
) -> io::Result<()> {
    let flip = |p: Pos2| (p.x, page_height - p.y);
    let (x0, y0) = flip(primitive.start());
    let (x1, y1) = flip(primitive.end());

    set_color(out, primitive.color())?;
    writeln!(out, "{} setlinewidth", num(primitive.width()))?;
    let cap = if primitive.has_round_caps() { 1 } else { 0 };
    writeln!(out, "{cap} setlinecap")?;

    match primitive.kind() {
        PrimitiveKind::Stroke | PrimitiveKind::Line => {
            writeln!(out, "1 setlinejoin")?;
            writeln!(
                out,
                "newpath {} {} moveto {} {} lineto stroke",
                num(x0),
                num(y0),
                num(x1),
                num(y1)
            )?;
        }
        PrimitiveKind::Rect => {
            writeln!(out, "0 setlinejoin")?;
            writeln!(
                out,
                "newpath {} {} moveto {} {} lineto {} {} lineto {} {} lineto closepath stroke",
                num(x0),
                num(y0),
                num(x1),
                num(y0),
                num(x1),
                num(y1),
                num(x0),
                num(y1)
            )?;
        }
        PrimitiveKind::Oval => {
            let bounds = primitive.bounds();
            let rx = bounds.width() / 2.0;
            let ry = bounds.height() / 2.0;
            writeln!(out, "1 setlinejoin")?;
            if rx == 0.0 || ry == 0.0 {
                // A flat oval collapses to its bounding segment
                writeln!(
                    out,
                    "newpath {} {} moveto {} {} lineto stroke",
                    num(x0),
                    num(y0),
                    num(x1),
                    num(y1)
                )?;
            } else {
                let center = bounds.center();
                // Scale only while building the path so the line width stays uniform.
                // setmatrix keeps the current path, grestore would drop it.
                writeln!(
                    out,
                    "newpath matrix currentmatrix {} {} translate {} {} scale 0 0 1 0 360 arc closepath setmatrix stroke",
                    num(center.x),
                    num(page_height - center.y),
                    num(rx),
                    num(ry)
                )?;
            }
        }
    }
    Ok(())
}

fn set_color<W: Write>(out: &mut W, color: Color32) -> io::Result<()> {
    writeln!(
        out,
        "{} {} {} setrgbcolor",
        channel(color.r()),
        channel(color.g()),
        channel(color.b())
    )
}

fn channel(value: u8) -> String {
    num(f32::from(value) / 255.0)
}

// Up to three decimals, trailing zeros trimmed
fn num(value: f32) -> String {
    let text = format!("{value:.3}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    match text {
        "" | "-0" => "0".to_owned(),
        other => other.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::{BrushSize, Style};
    use egui::{pos2, vec2};

    fn canvas(width: f32, height: f32) -> Canvas {
        let mut canvas = Canvas::default();
        canvas.resize(vec2(width, height));
        canvas
    }

    fn render(canvas: &Canvas) -> String {
        let mut out = Vec::new();
        write_postscript(canvas, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn number_formatting() {
        assert_eq!(num(3.0), "3");
        assert_eq!(num(0.5), "0.5");
        assert_eq!(num(1.0 / 3.0), "0.333");
        assert_eq!(num(-0.0001), "0");
        assert_eq!(channel(255), "1");
        assert_eq!(channel(0), "0");
    }

    #[test]
    fn page_has_canvas_size_and_background() {
        let mut canvas = canvas(640.0, 480.0);
        canvas.change_background(Color32::from_rgb(255, 0, 0));
        let ps = render(&canvas);

        assert!(ps.starts_with("%!PS-Adobe-3.0\n"));
        assert!(ps.contains("%%BoundingBox: 0 0 640 480"));
        assert!(ps.contains("1 0 0 setrgbcolor\n0 0 640 480 rectfill"));
        assert!(ps.trim_end().ends_with("%%EOF"));
    }

    #[test]
    fn y_axis_is_flipped() {
        let mut canvas = canvas(100.0, 100.0);
        canvas.commit(Primitive::line(
            pos2(10.0, 20.0),
            pos2(30.0, 90.0),
            Style::new(Color32::BLACK, BrushSize::new(5)),
        ));
        let ps = render(&canvas);

        assert!(ps.contains("5 setlinewidth\n1 setlinecap\n1 setlinejoin\n"));
        assert!(ps.contains("newpath 10 80 moveto 30 10 lineto stroke"));
    }

    #[test]
    fn preview_is_not_exported() {
        let mut canvas = canvas(50.0, 50.0);
        canvas.set_preview(Some(Primitive::rect(
            pos2(1.0, 1.0),
            pos2(20.0, 20.0),
            Style::new(Color32::BLUE, BrushSize::new(7)),
        )));
        let ps = render(&canvas);

        assert!(!ps.contains("7 setlinewidth"));
        assert!(!ps.contains("closepath"));
    }

    #[test]
    fn flat_oval_has_no_singular_scale() {
        let mut canvas = canvas(50.0, 50.0);
        canvas.commit(Primitive::oval(
            pos2(10.0, 10.0),
            pos2(10.0, 10.0),
            Style::new(Color32::BLACK, BrushSize::default()),
        ));
        let ps = render(&canvas);

        assert!(!ps.contains("scale"));
        assert!(ps.contains("newpath 10 40 moveto 10 40 lineto stroke"));
    }

    #[test]
    fn oval_uses_unit_arc() {
        let mut canvas = canvas(100.0, 100.0);
        canvas.commit(Primitive::oval(
            pos2(10.0, 10.0),
            pos2(50.0, 30.0),
            Style::new(Color32::BLACK, BrushSize::default()),
        ));
        let ps = render(&canvas);

        let oval = ps.lines().find(|line| line.contains(" arc ")).unwrap();
        assert_eq!(
            oval,
            "newpath matrix currentmatrix 30 80 translate 20 10 scale 0 0 1 0 360 arc closepath setmatrix stroke"
        );
        // Exactly one save/restore pair, around the whole page
        assert_eq!(ps.matches("gsave").count(), 1);
        assert_eq!(ps.matches("grestore").count(), 1);
    }

    #[test]
    fn empty_canvas_size_is_rejected() {
        let canvas = Canvas::default();
        let mut out = Vec::new();
        assert!(matches!(
            write_postscript(&canvas, &mut out),
            Err(ExportError::InvalidPageSize { width: 0, height: 0 })
        ));
    }
}
