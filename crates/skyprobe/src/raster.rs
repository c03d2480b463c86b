//! SVG rasterizer for the obstruction map.
//!
//! Turns the per-wedge obstruction fractions into a compass-aligned disc:
//! a sky-blue circle, one dark-red sector per obstructed wedge with its
//! radius scaled by the fraction, a white crosshair, and N/E/S/W labels.
//! North sits at the top; wedge zero starts there and sectors run
//! clockwise.

use skyprobe_report::{ImageHandle, ObstructionRasterizer};

const SIZE: f64 = 600.0;
const CENTER: f64 = SIZE / 2.0;
const MAX_RADIUS: f64 = 290.0;

const SKY_FILL: &str = "#0067bc";
const OBSTRUCTION_FILL: &str = "#820000";

#[derive(Debug, Default)]
pub struct SvgRasterizer;

impl ObstructionRasterizer for SvgRasterizer {
    fn render(&self, wedge_fractions: &[f64]) -> ImageHandle {
        ImageHandle::new(render_svg(wedge_fractions).into_bytes())
    }
}

/// Point on the disc for a clockwise angle from north, in degrees.
fn polar(angle_deg: f64, dist: f64) -> (f64, f64) {
    let rad = (angle_deg + 270.0).to_radians();
    (CENTER + dist * rad.cos(), CENTER + dist * rad.sin())
}

fn render_svg(fractions: &[f64]) -> String {
    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {SIZE} {SIZE}\">\n\
         <circle cx=\"{CENTER}\" cy=\"{CENTER}\" r=\"{MAX_RADIUS}\" fill=\"{SKY_FILL}\"/>\n"
    );

    if !fractions.is_empty() {
        let span = 360.0 / fractions.len() as f64;
        for (i, fraction) in fractions.iter().enumerate() {
            if *fraction <= 0.0 {
                continue;
            }
            let radius = (MAX_RADIUS * fraction).min(MAX_RADIUS);
            let start = i as f64 * span;
            let (x1, y1) = polar(start, radius);
            let (x2, y2) = polar(start + span, radius);
            svg.push_str(&format!(
                "<path d=\"M {CENTER:.1} {CENTER:.1} L {x1:.1} {y1:.1} \
                 A {radius:.1} {radius:.1} 0 0 1 {x2:.1} {y2:.1} Z\" \
                 fill=\"{OBSTRUCTION_FILL}\"/>\n"
            ));
        }
    }

    svg.push_str(&format!(
        "<line x1=\"{CENTER}\" y1=\"0\" x2=\"{CENTER}\" y2=\"{SIZE}\" stroke=\"white\"/>\n\
         <line x1=\"0\" y1=\"{CENTER}\" x2=\"{SIZE}\" y2=\"{CENTER}\" stroke=\"white\"/>\n\
         <text x=\"{CENTER}\" y=\"14\" fill=\"white\" text-anchor=\"middle\">N</text>\n\
         <text x=\"{CENTER}\" y=\"598\" fill=\"white\" text-anchor=\"middle\">S</text>\n\
         <text x=\"4\" y=\"{CENTER}\" fill=\"white\">W</text>\n\
         <text x=\"588\" y=\"{CENTER}\" fill=\"white\">E</text>\n\
         </svg>\n"
    ));

    svg
}
