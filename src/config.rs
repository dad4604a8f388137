use queryquill_core::generator::{EXPORT_DELAY_MS, GENERATE_DELAY_MS};
use queryquill_core::notice::{NOTICE_FADE_MS, NOTICE_VISIBLE_MS};

/// Build-time timing overrides, read the same way as other deploy knobs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Timing {
    pub(crate) generate_delay_ms: u32,
    pub(crate) export_delay_ms: u32,
    pub(crate) notice_visible_ms: u32,
    pub(crate) notice_fade_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            generate_delay_ms: GENERATE_DELAY_MS,
            export_delay_ms: EXPORT_DELAY_MS,
            notice_visible_ms: NOTICE_VISIBLE_MS,
            notice_fade_ms: NOTICE_FADE_MS,
        }
    }
}

pub(crate) fn timing() -> Timing {
    let defaults = Timing::default();
    Timing {
        generate_delay_ms: parse_millis(
            option_env!("QUERYQUILL_GENERATE_DELAY_MS")
                .or(option_env!("TRUNK_PUBLIC_QUERYQUILL_GENERATE_DELAY_MS")),
        )
        .unwrap_or(defaults.generate_delay_ms),
        export_delay_ms: parse_millis(
            option_env!("QUERYQUILL_EXPORT_DELAY_MS")
                .or(option_env!("TRUNK_PUBLIC_QUERYQUILL_EXPORT_DELAY_MS")),
        )
        .unwrap_or(defaults.export_delay_ms),
        notice_visible_ms: parse_millis(
            option_env!("QUERYQUILL_NOTICE_MS").or(option_env!("TRUNK_PUBLIC_QUERYQUILL_NOTICE_MS")),
        )
        .unwrap_or(defaults.notice_visible_ms),
        notice_fade_ms: defaults.notice_fade_ms,
    }
}

fn parse_millis(raw: Option<&str>) -> Option<u32> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn blank_or_invalid_overrides_are_ignored() {
        assert_eq!(parse_millis(None), None);
        assert_eq!(parse_millis(Some("  ")), None);
        assert_eq!(parse_millis(Some("soon")), None);
        assert_eq!(parse_millis(Some(" 150 ")), Some(150));
    }

    #[wasm_bindgen_test]
    fn defaults_match_core_constants() {
        let timing = Timing::default();
        assert_eq!(timing.generate_delay_ms, 2_000);
        assert_eq!(timing.export_delay_ms, 500);
        assert_eq!(timing.notice_visible_ms, 3_200);
        assert_eq!(timing.notice_fade_ms, 350);
    }
}
