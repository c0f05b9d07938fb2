//! # Rendering
//!
//! Turns command results into terminal text. Every function returns a `String` so
//! output can be tested without capturing stdout; callers print it.
//!
//! The car list is always rendered from scratch from the current state. There is no
//! incremental patching after a mutation.

use colored::Colorize;
use garage::api::{CmdMessage, MessageLevel, SaveFileSummary};
use garage::index::{DisplayCar, DisplayIndex};
use unicode_width::UnicodeWidthStr;

const PHOTO_MARKER: &str = "[photo]";
const NO_DETAILS: &str = "No details added.";

pub fn render_save_files(save_files: &[SaveFileSummary]) -> String {
    if save_files.is_empty() {
        return "No save files yet. Create one with `garage new <name>`.\n".to_string();
    }

    let name_width = save_files
        .iter()
        .map(|sf| sf.name.width())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for sf in save_files {
        let padding = " ".repeat(name_width - sf.name.width());
        let count = format!(
            "{} {}",
            sf.car_count,
            if sf.car_count == 1 { "car" } else { "cars" }
        );
        out.push_str(&format!(
            "  {}{}  {}\n",
            sf.name.bold(),
            padding,
            count.dimmed()
        ));
    }
    out
}

pub fn render_car_list(save_file: &str, cars: &[DisplayCar]) -> String {
    let mut out = format!("{}\n", save_file.bold().underline());
    if cars.is_empty() {
        out.push_str(&format!("  {}\n", "No cars yet.".dimmed()));
        return out;
    }
    for dc in cars {
        out.push_str(&render_car(dc));
    }
    out
}

fn render_car(dc: &DisplayCar) -> String {
    let mut out = String::new();
    let index = format!("{}.", dc.index);
    let marker = if dc.car.has_photo() {
        format!("  {}", PHOTO_MARKER.cyan())
    } else {
        String::new()
    };
    out.push_str(&format!(
        "  {} {}{}\n",
        index.yellow(),
        dc.car.name.bold(),
        marker
    ));

    // Details hang under the car name, past the index column.
    let indent = " ".repeat(3 + index.width());
    if dc.car.details.is_empty() {
        out.push_str(&format!("{}{}\n", indent, NO_DETAILS.dimmed()));
    } else {
        for (position, detail) in dc.car.details.iter().enumerate() {
            let number = format!("{})", DisplayIndex::from_position(position));
            out.push_str(&format!("{}{} {}\n", indent, number.dimmed(), detail));
        }
    }
    out
}

pub fn render_cars(cars: &[DisplayCar]) -> String {
    cars.iter().map(render_car).collect()
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use garage::model::Car;

    fn plain() {
        colored::control::set_override(false);
    }

    fn display(position: usize, car: Car) -> DisplayCar {
        DisplayCar {
            save_file: "Garage".into(),
            index: DisplayIndex::from_position(position),
            car,
        }
    }

    #[test]
    fn save_files_align_counts() {
        plain();
        let out = render_save_files(&[
            SaveFileSummary {
                name: "Garage".into(),
                car_count: 2,
            },
            SaveFileSummary {
                name: "Ü".into(),
                car_count: 1,
            },
        ]);
        assert_eq!(out, "  Garage  2 cars\n  Ü       1 car\n");
    }

    #[test]
    fn empty_save_file_list() {
        plain();
        assert!(render_save_files(&[]).starts_with("No save files yet."));
    }

    #[test]
    fn car_list_with_details_and_photo() {
        plain();
        let etk = Car {
            name: "ETK I-Series 2400i".into(),
            photo: Some("data:x".into()),
            details: vec!["Turbo kit".into(), "Coilovers".into()],
        };
        let covet = Car::new("Covet".into());

        let out = render_car_list("Garage", &[display(0, etk), display(1, covet)]);
        let expected = "\
Garage
  1. ETK I-Series 2400i  [photo]
     1) Turbo kit
     2) Coilovers
  2. Covet
     No details added.
";
        assert_eq!(out, expected);
    }

    #[test]
    fn empty_car_list() {
        plain();
        assert_eq!(render_car_list("Track", &[]), "Track\n  No cars yet.\n");
    }
}
