//! Stateless SVG rendering for plants.
//!
//! Everything here is a pure string builder: the same stage and mood always
//! produce the same markup. The visual complexity grows with the stage,
//! from two soil ellipses for a seed up to a six-petaled flower.
use crate::{stage_of, PlantRecord, Stage};

/// Fallback color for moods outside the known vocabulary.
const DEFAULT_COLOR: &str = "#a8d5d7";

/// Canvas size of the whole-garden scene.
const GARDEN_WIDTH: f64 = 800.0;
const GARDEN_HEIGHT: f64 = 600.0;

/// Maps a mood tag to its illustration color.
pub fn mood_color(mood: &str) -> &'static str {
    match mood {
        "calm" => "#a8d5d7",
        "joyful" => "#ffd89b",
        "grateful" => "#ffb3ba",
        "hopeful" => "#bae1ff",
        _ => DEFAULT_COLOR,
    }
}

/// Renders a single plant as a self-contained SVG document.
pub fn plant_markup(stage: Stage, mood: &str) -> String {
    let body = stage_body(stage, mood_color(mood));
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"120\" height=\"120\" viewBox=\"0 0 100 100\">\n  <g>{}</g>\n</svg>\n",
        body
    )
}

/// Renders the whole garden as one SVG scene.
///
/// Each plant is placed by its stored percentage coordinates, with an
/// animation delay staggered by insertion index.
pub fn garden_markup(plants: &[PlantRecord], now: i64) -> String {
    let mut scene = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">\n",
        GARDEN_WIDTH, GARDEN_HEIGHT, GARDEN_WIDTH, GARDEN_HEIGHT
    );
    scene.push_str(
        "  <line x1=\"0\" y1=\"560\" x2=\"800\" y2=\"560\" stroke=\"#d4a574\" stroke-width=\"2\" opacity=\"0.4\" />\n",
    );

    for (index, plant) in plants.iter().enumerate() {
        let stage = stage_of(plant.created_at, now);
        let body = stage_body(stage, mood_color(&plant.mood));
        // Center the 120px illustration box on the stored position.
        let px = plant.x / 100.0 * GARDEN_WIDTH - 60.0;
        let py = plant.y / 100.0 * GARDEN_HEIGHT - 60.0;
        scene.push_str(&format!(
            "  <svg x=\"{:.1}\" y=\"{:.1}\" width=\"120\" height=\"120\" viewBox=\"0 0 100 100\" style=\"animation-delay: {:.1}s\">\n    <g>{}</g>\n  </svg>\n",
            px,
            py,
            index as f64 * 0.1,
            body
        ));
    }

    scene.push_str("</svg>\n");
    scene
}

fn stage_body(stage: Stage, color: &str) -> String {
    match stage {
        Stage::Seed => seed_body(),
        Stage::Sprout => sprout_body(color),
        Stage::Flower => flower_body(color),
    }
}

fn seed_body() -> String {
    concat!(
        r##"<ellipse cx="50" cy="70" rx="12" ry="8" fill="#d4a574" opacity="0.6" />"##,
        r##"<ellipse cx="50" cy="70" rx="8" ry="5" fill="#c9915f" opacity="0.4" />"##,
    )
    .to_string()
}

fn sprout_body(color: &str) -> String {
    format!(
        r##"<ellipse cx="50" cy="70" rx="14" ry="6" fill="#d4a574" opacity="0.5" /><path d="M 50,64 Q 47,48 48,30" stroke="{color}" stroke-width="3" fill="none" stroke-linecap="round" /><path d="M 50,64 Q 53,46 52,28" stroke="{color}" stroke-width="2.5" fill="none" stroke-linecap="round" opacity="0.7" /><ellipse cx="42" cy="45" rx="6" ry="10" fill="{color}" opacity="0.7" transform="rotate(-35 42 45)" /><ellipse cx="58" cy="40" rx="6" ry="10" fill="{color}" opacity="0.7" transform="rotate(35 58 40)" />"##
    )
}

fn flower_body(color: &str) -> String {
    let mut body = format!(
        r##"<ellipse cx="50" cy="70" rx="16" ry="7" fill="#d4a574" opacity="0.5" /><path d="M 50,62 Q 48,45 47,20" stroke="{color}" stroke-width="3.5" fill="none" stroke-linecap="round" /><path d="M 47,40 Q 38,42 32,45" stroke="{color}" stroke-width="2.5" fill="none" opacity="0.8" /><path d="M 47,30 Q 58,28 64,32" stroke="{color}" stroke-width="2.5" fill="none" opacity="0.8" /><ellipse cx="38" cy="42" rx="7" ry="11" fill="{color}" opacity="0.8" transform="rotate(-40 38 42)" /><ellipse cx="64" cy="34" rx="7" ry="11" fill="{color}" opacity="0.8" transform="rotate(40 64 34)" /><ellipse cx="40" cy="55" rx="6" ry="9" fill="{color}" opacity="0.6" transform="rotate(-35 40 55)" /><circle cx="50" cy="20" r="4" fill="#fff9e6" opacity="0.9" />"##
    );

    // Six petals rotated around the flower center in 60 degree steps.
    for angle in [0, 60, 120, 180, 240, 300] {
        let rad = f64::from(angle).to_radians();
        let cx = 50.0 + rad.cos() * 10.0;
        let cy = 20.0 + rad.sin() * 10.0;
        body.push_str(&format!(
            r##"<ellipse cx="{cx}" cy="{cy}" rx="6" ry="9" fill="{color}" opacity="0.85" transform="rotate({angle} {cx} {cy})" />"##
        ));
    }

    body.push_str(r##"<circle cx="50" cy="20" r="3.5" fill="#ffd700" opacity="0.9" />"##);
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MS_PER_DAY;

    #[test]
    fn mood_colors_are_deterministic() {
        assert_eq!(mood_color("calm"), "#a8d5d7");
        assert_eq!(mood_color("joyful"), "#ffd89b");
        assert_eq!(mood_color("grateful"), "#ffb3ba");
        assert_eq!(mood_color("hopeful"), "#bae1ff");
        assert_eq!(mood_color("calm"), mood_color("calm"));
    }

    #[test]
    fn every_known_mood_has_its_own_color() {
        let colors: std::collections::HashSet<&str> =
            crate::MOODS.iter().map(|mood| mood_color(mood)).collect();
        assert_eq!(colors.len(), crate::MOODS.len());
    }

    #[test]
    fn unknown_moods_fall_back_to_the_default() {
        assert_eq!(mood_color("melancholy"), "#a8d5d7");
        assert_eq!(mood_color(""), "#a8d5d7");
    }

    #[test]
    fn seed_markup_is_two_soil_shapes() {
        let markup = plant_markup(Stage::Seed, "calm");
        assert_eq!(markup.matches("<ellipse").count(), 2);
        assert!(!markup.contains("petal"));
        assert!(!markup.contains("#a8d5d7"), "seeds carry no mood color");
    }

    #[test]
    fn sprout_markup_carries_stem_and_leaves() {
        let markup = plant_markup(Stage::Sprout, "joyful");
        assert_eq!(markup.matches("<path").count(), 2);
        assert_eq!(markup.matches("rotate(").count(), 2);
        assert!(markup.contains("#ffd89b"));
    }

    #[test]
    fn flower_markup_has_six_petals_and_a_center() {
        let markup = plant_markup(Stage::Flower, "hopeful");
        // Petals are the only shapes at 0.85 opacity.
        assert_eq!(markup.matches("opacity=\"0.85\"").count(), 6);
        assert!(markup.contains("#ffd700"));
        assert!(markup.contains("#bae1ff"));
    }

    #[test]
    fn markup_is_stable_across_calls() {
        assert_eq!(
            plant_markup(Stage::Flower, "grateful"),
            plant_markup(Stage::Flower, "grateful")
        );
    }

    #[test]
    fn garden_scene_staggers_animation_by_index() {
        let mut first = PlantRecord::new("one".to_string(), "calm".to_string());
        first.x = 50.0;
        first.y = 50.0;
        let mut second = PlantRecord::new("two".to_string(), "joyful".to_string());
        second.x = 25.0;
        second.y = 40.0;

        let now = first.created_at + MS_PER_DAY * 4;
        let scene = garden_markup(&[first, second], now);
        assert!(scene.contains("animation-delay: 0.0s"));
        assert!(scene.contains("animation-delay: 0.1s"));
        assert!(scene.contains("<line"), "ground line missing");
    }

    #[test]
    fn empty_garden_scene_is_just_the_ground() {
        let scene = garden_markup(&[], 0);
        assert!(scene.contains("<line"));
        assert!(!scene.contains("animation-delay"));
    }
}
