//! Window icon: a PNG beside the executable, or a built-in glyph.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use multichart_common::PlatformError;

/// Edge length of the built-in icon in pixels.
const BUILTIN_SIZE: u32 = 32;

/// Largest icon edge accepted from disk.
const MAX_ICON_SIZE: u32 = 256;

/// Straight RGBA8 pixels, row-major, ready for the windowing toolkit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppIcon {
    pub rgba: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl AppIcon {
    /// Load the icon at `path`, falling back to [`AppIcon::builtin`].
    pub fn resolve(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no icon file, using built-in icon");
            return Self::builtin();
        }
        match Self::load_png(path) {
            Ok(icon) => icon,
            Err(e) => {
                tracing::warn!(error = %e, "using built-in icon");
                Self::builtin()
            }
        }
    }

    /// Decode a PNG file into RGBA8.
    pub fn load_png(path: &Path) -> Result<Self, PlatformError> {
        let icon_err =
            |e: &dyn std::fmt::Display| PlatformError::IconError(format!("{}: {e}", path.display()));

        let file = File::open(path).map_err(|e| icon_err(&e))?;
        let mut decoder = png::Decoder::new(BufReader::new(file));
        decoder.set_transformations(png::Transformations::normalize_to_color8());
        let mut reader = decoder.read_info().map_err(|e| icon_err(&e))?;

        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).map_err(|e| icon_err(&e))?;
        if info.width == 0 || info.height == 0 || info.width.max(info.height) > MAX_ICON_SIZE {
            let size = format!("unsupported icon size {}x{}", info.width, info.height);
            return Err(icon_err(&size));
        }

        let pixels = &buf[..info.buffer_size()];
        let rgba = match info.color_type {
            png::ColorType::Rgba => pixels.to_vec(),
            png::ColorType::Rgb => pixels
                .chunks_exact(3)
                .flat_map(|p| [p[0], p[1], p[2], 0xff])
                .collect(),
            png::ColorType::GrayscaleAlpha => pixels
                .chunks_exact(2)
                .flat_map(|p| [p[0], p[0], p[0], p[1]])
                .collect(),
            png::ColorType::Grayscale => pixels.iter().flat_map(|&g| [g, g, g, 0xff]).collect(),
            png::ColorType::Indexed => {
                return Err(icon_err(&"palette was not expanded"));
            }
        };

        Ok(Self {
            rgba,
            width: info.width,
            height: info.height,
        })
    }

    /// Three stacked bars on a dark tile, one per default pane.
    pub fn builtin() -> Self {
        const BACKGROUND: [u8; 4] = [0x12, 0x12, 0x12, 0xff];
        const BAR: [u8; 4] = [0xe6, 0xe6, 0xe6, 0xff];
        const MARGIN: u32 = 4;
        const BAR_HEIGHT: u32 = 6;
        const PITCH: u32 = 9;

        let size = BUILTIN_SIZE;
        let mut rgba = Vec::with_capacity((size * size * 4) as usize);
        for y in 0..size {
            let in_bar = y >= MARGIN && (y - MARGIN) % PITCH < BAR_HEIGHT && y < size - MARGIN;
            for x in 0..size {
                let px = if in_bar && x >= MARGIN && x < size - MARGIN {
                    BAR
                } else {
                    BACKGROUND
                };
                rgba.extend_from_slice(&px);
            }
        }

        Self {
            rgba,
            width: size,
            height: size,
        }
    }
}
