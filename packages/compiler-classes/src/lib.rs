//! # Style → Utility Class Compiler
//!
//! Compiles a structured [`Style`] into a utility-class string, one rule per
//! recognized property, in fixed rule-declaration order. Output is stable:
//! the same input always yields the same space-joined, duplicate-free string,
//! so tests can compare it literally.
//!
//! The consuming styling engine scans classes statically and cannot execute
//! arbitrary strings at runtime, so every emitted token must match one of
//! [`SAFELIST_PATTERNS`]. Values are passed through verbatim inside
//! arbitrary-value brackets — the compiler never validates CSS syntax; a
//! falsy value (unset, empty, literal `"0"`) simply emits nothing.
//!
//! `color` and `fontSize` intentionally share the `text-[...]` family. A
//! style setting both emits two `text-[...]` tokens and some consumers will
//! resolve them last-wins. This matches observed product behavior and is
//! preserved, not fixed.

mod inline;

pub use inline::inline_style;

use pagecraft_model::Style;

/// Regex family the static class scanner safelists. The compiler only ever
/// emits tokens matching one of these.
pub const SAFELIST_PATTERNS: &[&str] = &[
    r"^m[trbl]-\[.+\]$",
    r"^p[trbl]-\[.+\]$",
    r"^w-(full|\[.+\])$",
    r"^h-(full|\[.+\])$",
    r"^text-\[.+\]$",
    r"^bg-\[.+\]$",
    r"^font-(bold|normal|\[.+\])$",
];

/// Compile a style object to its utility-class string.
///
/// Returns an empty string when no property produces a class.
pub fn style_to_classes(style: &Style) -> String {
    let mut classes: Vec<String> = Vec::new();

    let mut push = |class: String| {
        if !classes.contains(&class) {
            classes.push(class);
        }
    };

    // Margins, then padding, one class per side.
    arbitrary(&mut push, "mt", &style.margin_top);
    arbitrary(&mut push, "mr", &style.margin_right);
    arbitrary(&mut push, "mb", &style.margin_bottom);
    arbitrary(&mut push, "ml", &style.margin_left);

    arbitrary(&mut push, "pt", &style.padding_top);
    arbitrary(&mut push, "pr", &style.padding_right);
    arbitrary(&mut push, "pb", &style.padding_bottom);
    arbitrary(&mut push, "pl", &style.padding_left);

    // Size: 100% gets the semantic full class.
    sized(&mut push, "w", &style.width);
    sized(&mut push, "h", &style.height);

    // color and fontSize share the text- family (see module docs).
    arbitrary(&mut push, "text", &style.color);
    arbitrary(&mut push, "text", &style.font_size);

    arbitrary(&mut push, "bg", &style.background_color);

    if let Some(weight) = emittable(&style.font_weight) {
        match weight {
            "bold" => push("font-bold".to_string()),
            "normal" => push("font-normal".to_string()),
            other => push(format!("font-[{}]", other)),
        }
    }

    classes.join(" ")
}

/// A value worth emitting: set, non-empty, and not the literal zero.
fn emittable(value: &Option<String>) -> Option<&str> {
    match value.as_deref() {
        None | Some("") | Some("0") => None,
        Some(v) => Some(v),
    }
}

fn arbitrary(push: &mut impl FnMut(String), prefix: &str, value: &Option<String>) {
    if let Some(v) = emittable(value) {
        push(format!("{}-[{}]", prefix, v));
    }
}

fn sized(push: &mut impl FnMut(String), prefix: &str, value: &Option<String>) {
    if let Some(v) = emittable(value) {
        if v == "100%" {
            push(format!("{}-full", prefix));
        } else {
            push(format!("{}-[{}]", prefix, v));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(f: impl FnOnce(&mut Style)) -> Style {
        let mut s = Style::default();
        f(&mut s);
        s
    }

    #[test]
    fn test_empty_style_compiles_to_empty_string() {
        assert_eq!(style_to_classes(&Style::default()), "");
    }

    #[test]
    fn test_margin_and_padding_sides() {
        let s = style(|s| {
            s.margin_top = Some("8px".to_string());
            s.margin_left = Some("4px".to_string());
            s.padding_bottom = Some("1.5rem".to_string());
        });
        assert_eq!(style_to_classes(&s), "mt-[8px] ml-[4px] pb-[1.5rem]");
    }

    #[test]
    fn test_units_pass_through_verbatim() {
        let s = style(|s| s.margin_top = Some("50%".to_string()));
        assert_eq!(style_to_classes(&s), "mt-[50%]");
    }

    #[test]
    fn test_zero_and_empty_emit_nothing() {
        let s = style(|s| {
            s.margin_top = Some("0".to_string());
            s.padding_left = Some("".to_string());
        });
        assert_eq!(style_to_classes(&s), "");
    }

    #[test]
    fn test_full_width_is_semantic() {
        let s = style(|s| s.width = Some("100%".to_string()));
        assert_eq!(style_to_classes(&s), "w-full");

        let s = style(|s| s.width = Some("200px".to_string()));
        assert_eq!(style_to_classes(&s), "w-[200px]");
    }

    #[test]
    fn test_font_weight_semantic_and_arbitrary() {
        let s = style(|s| s.font_weight = Some("bold".to_string()));
        assert_eq!(style_to_classes(&s), "font-bold");

        let s = style(|s| s.font_weight = Some("normal".to_string()));
        assert_eq!(style_to_classes(&s), "font-normal");

        let s = style(|s| s.font_weight = Some("600".to_string()));
        assert_eq!(style_to_classes(&s), "font-[600]");
    }

    #[test]
    fn test_color_and_font_size_share_text_family() {
        let s = style(|s| {
            s.color = Some("#333".to_string());
            s.font_size = Some("14px".to_string());
        });
        // Latent collision preserved on purpose: two text-[...] tokens.
        assert_eq!(style_to_classes(&s), "text-[#333] text-[14px]");
    }

    #[test]
    fn test_identical_values_dedupe() {
        let s = style(|s| {
            s.color = Some("14px".to_string());
            s.font_size = Some("14px".to_string());
        });
        assert_eq!(style_to_classes(&s), "text-[14px]");
    }

    #[test]
    fn test_deterministic() {
        let s = style(|s| {
            s.margin_top = Some("8px".to_string());
            s.width = Some("100%".to_string());
            s.background_color = Some("#fafafa".to_string());
            s.font_weight = Some("bold".to_string());
        });
        let first = style_to_classes(&s);
        let second = style_to_classes(&s);
        assert_eq!(first, second);
        assert_eq!(first, "mt-[8px] w-full bg-[#fafafa] font-bold");
    }

    fn safelist() -> Vec<regex::Regex> {
        SAFELIST_PATTERNS
            .iter()
            .map(|pattern| regex::Regex::new(pattern).unwrap())
            .collect()
    }

    #[test]
    fn test_output_matches_safelist() {
        let patterns = safelist();
        let s = style(|s| {
            s.margin_top = Some("8px".to_string());
            s.padding_left = Some("4px".to_string());
            s.width = Some("100%".to_string());
            s.height = Some("40px".to_string());
            s.color = Some("#333".to_string());
            s.background_color = Some("#fff".to_string());
            s.font_weight = Some("500".to_string());
        });

        for token in style_to_classes(&s).split_whitespace() {
            assert!(
                patterns.iter().any(|pattern| pattern.is_match(token)),
                "token {} outside safelist",
                token
            );
        }
    }

    #[test]
    fn test_safelist_rejects_foreign_tokens() {
        let patterns = safelist();
        for stray in ["mystery-widget", "text-red-500", "w-1/2", "mt-8", "font-semibold"] {
            assert!(
                !patterns.iter().any(|pattern| pattern.is_match(stray)),
                "token {} wrongly inside safelist",
                stray
            );
        }
    }
}
