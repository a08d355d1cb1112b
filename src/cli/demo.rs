//! Translator walkthrough and terminal rendering

use std::io::Write;

use crate::core::client::AiwfClient;
use crate::core::errors::ClientError;
use crate::core::models::{TranslateRequest, TranslateResponse};

/// Width of the line printed between translations
pub const SEPARATOR_WIDTH: usize = 50;

/// Command suggested when the server cannot be reached
pub const SERVE_HINT: &str = "aiwf serve -f examples/php-translator-example.yaml";

/// One translation performed by the walkthrough
#[derive(Debug, Clone, Copy)]
pub struct DemoStep {
    pub banner: &'static str,
    pub target_lang: &'static str,
    pub text: &'static str,
}

/// Requests issued in order by [`run_demo`]
pub const DEMO_STEPS: [DemoStep; 2] = [
    DemoStep {
        banner: "🔄 Translating...",
        target_lang: "en",
        text: "Привет, мир! Это пример использования AIWF.",
    },
    DemoStep {
        banner: "🔄 Translating to Spanish...",
        target_lang: "es",
        text: "Hello, world!",
    },
];

/// Run both walkthrough translations, stopping at the first failure.
///
/// Output is written to `out` as each response arrives, so a failure in the
/// second call leaves the first block in place.
pub async fn run_demo<W: Write>(client: &AiwfClient, out: &mut W) -> anyhow::Result<()> {
    for (i, step) in DEMO_STEPS.iter().enumerate() {
        if i > 0 {
            write_separator(out)?;
        }

        let request = TranslateRequest::new(step.target_lang, step.text);
        writeln!(out, "{}", step.banner)?;
        let response = client.translator(&request).await?;
        write_translation(out, &request, &response)?;
    }

    Ok(())
}

/// Print one result block
pub fn write_translation<W: Write>(
    out: &mut W,
    request: &TranslateRequest,
    response: &TranslateResponse,
) -> std::io::Result<()> {
    writeln!(out, "\n✅ Translation complete!\n")?;
    writeln!(out, "Original: {}", request.text)?;
    writeln!(out, "Translated: {}", response.translated)?;
    writeln!(out, "Source Language: {}", response.source_lang)?;
    writeln!(out, "Confidence: {}%", format_percent(response.confidence_percent()))
}

/// Print the line of `=` between two result blocks
pub fn write_separator<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "\n{}\n", "=".repeat(SEPARATOR_WIDTH))
}

/// Print the failure block shown before exiting with status 1
pub fn write_error<W: Write>(out: &mut W, err: &anyhow::Error) -> std::io::Result<()> {
    writeln!(out, "❌ Error: {}", error_message(err))?;
    writeln!(out, "\nMake sure AIWF server is running:")?;
    writeln!(out, "  {}", SERVE_HINT)
}

fn error_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<ClientError>() {
        Some(client_err) => client_err.to_string(),
        None => format!("{:#}", err),
    }
}

/// Render a percentage without float noise: `95`, `98.7`, `57`
pub fn format_percent(value: f64) -> String {
    let rendered = format!("{:.10}", value);
    let trimmed = rendered.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(95.0), "95");
        assert_eq!(format_percent(0.987 * 100.0), "98.7");
        assert_eq!(format_percent(0.57 * 100.0), "57");
        assert_eq!(format_percent(0.0), "0");
        assert_eq!(format_percent(100.0), "100");
    }

    #[test]
    fn test_write_translation_block() {
        let request = TranslateRequest::new("en", "Привет");
        let response = TranslateResponse {
            translated: "Hello".to_string(),
            source_lang: "ru".to_string(),
            confidence: 0.95,
        };

        let mut out = Vec::new();
        write_translation(&mut out, &request, &response).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text,
            "\n✅ Translation complete!\n\n\
             Original: Привет\n\
             Translated: Hello\n\
             Source Language: ru\n\
             Confidence: 95%\n"
        );
    }

    #[test]
    fn test_separator_is_fifty_equals() {
        let mut out = Vec::new();
        write_separator(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.trim(), "=".repeat(50));
    }

    #[test]
    fn test_write_error_block() {
        let err = anyhow::Error::new(ClientError::Api {
            status: 503,
            body: "unavailable".to_string(),
        });

        let mut out = Vec::new();
        write_error(&mut out, &err).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("❌ Error: HTTP Error 503: unavailable\n"));
        assert!(text.contains("Make sure AIWF server is running:"));
        assert!(text.ends_with("  aiwf serve -f examples/php-translator-example.yaml\n"));
    }

    #[test]
    fn test_demo_steps_order() {
        assert_eq!(DEMO_STEPS[0].target_lang, "en");
        assert_eq!(DEMO_STEPS[1].target_lang, "es");
        assert_eq!(DEMO_STEPS[1].text, "Hello, world!");
    }
}
