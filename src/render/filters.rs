//! MiniJinja filter registration.

use minijinja::{Environment, Value};
use unicode_width::UnicodeWidthStr;

use super::theme::{swatch, Theme};
use crate::color::Rgb;

/// Registers the report filters on a minijinja environment.
pub(crate) fn register_filters(env: &mut Environment<'static>, theme: Theme, use_color: bool) {
    let styles = theme.clone();
    env.add_filter("style", move |value: Value, name: String| -> String {
        styles.apply(&name, &value.to_string(), use_color)
    });

    // Pads to a display width so labels line up even with wide characters.
    env.add_filter("pad", |value: Value, width: usize| -> String {
        pad_right(&value.to_string(), width)
    });

    env.add_filter("ratio", |value: f64| -> String { format_ratio(value) });

    let verdicts = theme;
    env.add_filter("verdict", move |passes: bool| -> String {
        if passes {
            verdicts.apply("pass", "\u{2713} Pass", use_color)
        } else {
            verdicts.apply("fail", "\u{2717} Fail", use_color)
        }
    });

    env.add_filter("swatch", move |value: String| -> String {
        match Rgb::parse(&value) {
            Ok(rgb) if use_color => format!("{} ", swatch(rgb)),
            _ => String::new(),
        }
    });
}

pub(crate) fn pad_right(text: &str, width: usize) -> String {
    let current = text.width();
    if current >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - current))
    }
}

/// `21.0` as `21`, `4.5` as `4.5`, `7.03` as `7.03`.
pub(crate) fn format_ratio(ratio: f64) -> String {
    let fixed = format!("{:.2}", ratio);
    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_right() {
        assert_eq!(pad_right("AA", 4), "AA  ");
        assert_eq!(pad_right("Contrast", 4), "Contrast");
    }

    #[test]
    fn test_pad_right_counts_display_width() {
        // CJK characters are two columns wide
        assert_eq!(pad_right("色", 4), "色  ");
    }

    #[test]
    fn test_format_ratio() {
        assert_eq!(format_ratio(21.0), "21");
        assert_eq!(format_ratio(4.5), "4.5");
        assert_eq!(format_ratio(7.03), "7.03");
        assert_eq!(format_ratio(1.0), "1");
    }

    #[test]
    fn test_filters_render_plain_without_color() {
        let mut env = Environment::new();
        register_filters(&mut env, Theme::light(), false);
        let out = env
            .render_str(
                r##"[{{ "AA" | pad(4) }}]{{ true | verdict }} {{ 21.0 | ratio }}{{ "#ff0000" | swatch }}"##,
                minijinja::context! {},
            )
            .unwrap();
        assert_eq!(out, "[AA  ]\u{2713} Pass 21");
    }
}
