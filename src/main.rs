//! Robot Race track entry point
//!
//! In the browser the page constructs `RaceTrackHook` itself. Natively this
//! runs one headless render pass over a snapshot and prints the draw calls.

#[cfg(not(target_arch = "wasm32"))]
mod preview {
    use std::io::Read;

    use serde_json::Value;

    use robot_race_track::protocol::{Inbound, Transport};
    use robot_race_track::race::Viewport;
    use robot_race_track::renderer::RecordingStage;
    use robot_race_track::{RaceTrack, Settings};

    const DEFAULT_SIZE: (f64, f64) = (800.0, 600.0);

    /// Logs intents instead of sending them
    struct LogTransport;

    impl Transport for LogTransport {
        fn push(&mut self, event: &str, payload: Value) {
            log::info!("-> {} {}", event, payload);
        }
    }

    fn parse_size(arg: &str) -> Option<Viewport> {
        let (w, h) = arg.split_once(['x', 'X'])?;
        Some(Viewport::new(w.trim().parse().ok()?, h.trim().parse().ok()?))
    }

    pub fn run() -> Result<(), String> {
        let mut viewport = Viewport::new(DEFAULT_SIZE.0, DEFAULT_SIZE.1);
        let mut path = None;

        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--size" => {
                    let value = args.next().ok_or("--size needs WIDTHxHEIGHT")?;
                    viewport = parse_size(&value).ok_or_else(|| format!("bad size '{}'", value))?;
                }
                "-h" | "--help" => {
                    println!("usage: robot-race-track [--size WxH] [snapshot.json]");
                    println!("Reads a game snapshot (file or stdin) and prints one render pass.");
                    return Ok(());
                }
                _ => path = Some(arg),
            }
        }

        let json = match path {
            Some(path) => std::fs::read_to_string(&path).map_err(|e| format!("{}: {}", path, e))?,
            None => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .map_err(|e| e.to_string())?;
                buf
            }
        };
        let settings = Settings::default();
        let message = Inbound::decode_str(&settings.update_event, &json, &settings)
            .map_err(|e| e.to_string())?;

        let mut track = RaceTrack::mount(LogTransport, RecordingStage::new(viewport), settings);
        track.receive(message);

        if track.passes() == 0 {
            println!("(nothing to draw)");
        }
        for command in track.stage().commands() {
            println!("{}", command);
        }
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_parse_size() {
            assert_eq!(parse_size("640x480"), Some(Viewport::new(640.0, 480.0)));
            assert_eq!(parse_size("10X20"), Some(Viewport::new(10.0, 20.0)));
            assert_eq!(parse_size("640"), None);
            assert_eq!(parse_size("ax3"), None);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Robot Race track (native preview)");

    if let Err(e) = preview::run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The page constructs RaceTrackHook / CopyLinkHook directly.
}
