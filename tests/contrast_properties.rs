//! Contrast and token-store behavior through the public API.

use proptest::prelude::*;
use serial_test::serial;
use tempo_tokens::{
    best_text_color, contrast_ratio, ensure_aaa_text_color, evaluate_contrast, get_tokens,
    reset_tokens, set_tokens, suggest_text_color_for_background, PartialColorTokens,
    PartialDesignTokens, Rgb, TextPalette,
};

fn hex_color() -> impl Strategy<Value = String> {
    any::<(u8, u8, u8)>().prop_map(|rgb| Rgb::from(rgb).to_hex())
}

#[test]
fn test_black_white_maximum_contrast() {
    assert_eq!(contrast_ratio("#000000", "#ffffff"), 21.0);
    let result = evaluate_contrast("#000000", "#ffffff");
    assert!(result.passes_aa);
    assert!(result.passes_aaa);
    assert!(result.passes_aa_large);
    assert!(result.passes_aaa_large);
}

#[test]
fn test_best_text_color_on_extremes() {
    assert_eq!(best_text_color("#000000"), "#ffffff");
    assert_eq!(best_text_color("#ffffff"), "#000000");
}

#[test]
fn test_ensure_aaa_on_white() {
    let choice = ensure_aaa_text_color("#ffffff", None);
    assert_eq!(choice.color, "#000000");
    assert!(choice.contrast.passes_aaa);
}

#[test]
fn test_suggest_inverse_on_near_black() {
    let palette = TextPalette::new("#1a1a1a", "#4a5568", "#ffffff");
    let suggestion = suggest_text_color_for_background("#0a0a0a", &palette);
    assert_eq!(suggestion.variable, "text-inverse");
}

#[test]
#[serial]
fn test_global_partial_merge_and_reset() {
    reset_tokens();
    let before = get_tokens();

    set_tokens(PartialDesignTokens {
        colors: Some(PartialColorTokens {
            primary: Some("#111111".into()),
            ..Default::default()
        }),
        ..Default::default()
    });

    let after = get_tokens();
    assert_eq!(after.colors.primary, "#111111");
    assert_eq!(after.colors.secondary, before.colors.secondary);
    assert_eq!(after.colors.accent, before.colors.accent);

    reset_tokens();
    let reset = get_tokens();
    assert_eq!(reset.colors.primary, "#2563eb");
    assert_eq!(reset.colors.secondary, "#64748b");
    assert_eq!(reset.colors.accent, "#f59e0b");
}

proptest! {
    #[test]
    fn prop_symmetric(a in hex_color(), b in hex_color()) {
        prop_assert_eq!(contrast_ratio(&a, &b), contrast_ratio(&b, &a));
    }

    #[test]
    fn prop_self_contrast(a in hex_color()) {
        prop_assert_eq!(contrast_ratio(&a, &a), 1.0);
    }

    #[test]
    fn prop_ensure_keeps_compliant_current(bg in hex_color(), current in hex_color()) {
        let choice = ensure_aaa_text_color(&bg, Some(&current));
        if evaluate_contrast(&current, &bg).passes_aaa {
            prop_assert_eq!(choice.color, current);
        } else {
            prop_assert!(choice.color == "#000000" || choice.color == "#ffffff");
        }
    }

    #[test]
    fn prop_best_text_color_is_never_worse(bg in hex_color()) {
        let best = best_text_color(&bg);
        let other = if best == "#000000" { "#ffffff" } else { "#000000" };
        prop_assert!(contrast_ratio(best, &bg) >= contrast_ratio(other, &bg));
    }

    #[test]
    fn prop_suggestion_comes_from_palette(
        bg in hex_color(),
        primary in hex_color(),
        secondary in hex_color(),
        inverse in hex_color(),
    ) {
        let palette = TextPalette::new(primary.clone(), secondary.clone(), inverse.clone());
        let suggestion = suggest_text_color_for_background(&bg, &palette);
        let expected = match suggestion.variable {
            "text-primary" => &primary,
            "text-secondary" => &secondary,
            "text-inverse" => &inverse,
            other => panic!("unexpected variable {}", other),
        };
        prop_assert_eq!(&suggestion.color, expected);
    }
}
