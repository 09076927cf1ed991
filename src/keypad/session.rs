//! Line-driven keypad loop for text terminals.
//!
//! Each input line holds whitespace-separated key labels, or a pointer
//! press `tap X Y` that is resolved through the surface's hit-testing.

use super::geometry::Point;
use super::key::Key;
use super::state::Keypad;
use super::surface::KeypadSurface;
use std::io::{self, BufRead};
use tracing::{debug, warn};

/// Drive `keypad` from `input` until end of input or `q`/`quit`,
/// redrawing `surface` after every line.
pub fn run<R, S>(input: R, surface: &mut S, keypad: &mut Keypad) -> io::Result<()>
where
    R: BufRead,
    S: KeypadSurface,
{
    surface.render(keypad)?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if matches!(line, "q" | "quit") {
            break;
        }

        let mut words = line.split_whitespace();
        while let Some(word) = words.next() {
            let key = if word == "tap" {
                let point = parse_point(words.next(), words.next());
                match point.and_then(|p| surface.hit_test(p)) {
                    Some(key) => key,
                    None => {
                        debug!(?point, "tap did not hit a key");
                        continue;
                    }
                }
            } else {
                match Key::from_label(word) {
                    Some(key) => key,
                    None => {
                        warn!(label = word, "unknown key");
                        continue;
                    }
                }
            };

            keypad.press(key);
        }

        surface.render(keypad)?;
    }

    Ok(())
}

fn parse_point(x: Option<&str>, y: Option<&str>) -> Option<Point> {
    let x = x?.parse().ok()?;
    let y = y?.parse().ok()?;
    Some(Point::new(x, y))
}
