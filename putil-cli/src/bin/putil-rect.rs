//! Standalone CLI tool for reading and placing window rectangles.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "putil-rect", about = "Read or set a top-level window's screen rectangle")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the window's bounding rectangle as JSON
    Get {
        /// Window handle (hex, e.g. 0x1A2B3C, or decimal)
        #[arg(value_parser = parse_hex_or_dec)]
        hwnd: isize,
    },
    /// Move/resize the window, re-anchoring it if it lands off screen
    Set {
        /// Window handle (hex, e.g. 0x1A2B3C, or decimal)
        #[arg(value_parser = parse_hex_or_dec)]
        hwnd: isize,
        /// Left edge in screen coordinates
        x: i32,
        /// Top edge in screen coordinates
        y: i32,
        /// Window width
        width: i32,
        /// Window height
        height: i32,
    },
}

fn parse_hex_or_dec(s: &str) -> Result<isize, String> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        isize::from_str_radix(hex, 16).map_err(|e| e.to_string())
    } else {
        s.parse::<isize>().map_err(|e| e.to_string())
    }
}

#[cfg(windows)]
fn main() {
    use putil_core::rect::{Bounds, RectPayload};
    use putil_core::win32::Win32WindowSystem;
    use putil_core::window::{place_window, WindowSystem};

    let args = Args::parse();
    let system = Win32WindowSystem;

    match args.command {
        Command::Get { hwnd } => match system.window_rect(hwnd) {
            Ok(bounds) => {
                let payload = RectPayload::from(bounds);
                println!("{}", serde_json::to_string_pretty(&payload).unwrap());
            }
            Err(e) => {
                eprintln!("Failed to read rect for {hwnd:#x}: {e}");
                std::process::exit(1);
            }
        },
        Command::Set { hwnd, x, y, width, height } => {
            // Same placement path the plugin uses, fallback included.
            place_window(&system, hwnd, Bounds { left: x, top: y, width, height });
            println!("Placed {hwnd:#x} at {x},{y} ({width}x{height})");
        }
    }
}

#[cfg(not(windows))]
fn main() {
    let _ = Args::parse();
    eprintln!("putil-rect only works on Windows");
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::parse_hex_or_dec;

    #[test]
    fn test_parse_hex_or_dec() {
        assert_eq!(parse_hex_or_dec("0x1A"), Ok(26));
        assert_eq!(parse_hex_or_dec("0X1a"), Ok(26));
        assert_eq!(parse_hex_or_dec("42"), Ok(42));
        assert!(parse_hex_or_dec("zz").is_err());
    }
}
