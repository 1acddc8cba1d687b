//! iTerm2: an XML property list of RGB component dictionaries.
//!
//! Unlike every other target, channels are written as reals in `0..=1`
//! rather than hex.

use prism_common::Color;
use std::fmt::Write;

use crate::palette::ResolvedPalette;

const HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
"#;

const FOOTER: &str = "</dict>\n</plist>\n";

pub(super) fn emit(p: &ResolvedPalette) -> String {
    let mut out = String::from(HEADER);

    for (i, color) in p.ansi.iter().enumerate() {
        push_color(&mut out, &format!("Ansi {i} Color"), *color);
    }

    let named = [
        ("Background Color", p.background),
        ("Bold Color", p.foreground),
        ("Cursor Color", p.cursor),
        ("Cursor Text Color", p.background),
        ("Foreground Color", p.foreground),
        ("Link Color", p.accent),
        ("Selected Text Color", p.foreground),
        ("Selection Color", p.selection),
    ];
    for (key, color) in named {
        push_color(&mut out, key, color);
    }

    out.push_str(FOOTER);
    out
}

fn push_color(out: &mut String, key: &str, color: Color) {
    let (r, g, b) = color.to_unit_rgb();
    let _ = write!(
        out,
        "\t<key>{key}</key>\n\
         \t<dict>\n\
         \t\t<key>Alpha Component</key>\n\
         \t\t<real>1</real>\n\
         \t\t<key>Blue Component</key>\n\
         \t\t<real>{b:.8}</real>\n\
         \t\t<key>Color Space</key>\n\
         \t\t<string>sRGB</string>\n\
         \t\t<key>Green Component</key>\n\
         \t\t<real>{g:.8}</real>\n\
         \t\t<key>Red Component</key>\n\
         \t\t<real>{r:.8}</real>\n\
         \t</dict>\n"
    );
}
