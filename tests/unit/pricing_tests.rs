/*!
 * Tests for quote calculation and controller quoting
 */

use anyhow::Result;
use voscript::app_config::Config;
use voscript::app_controller::Controller;
use voscript::pricing::{calculate_quote, format_currency, PricingConfig, PricingModel};

use crate::common;

#[test]
fn test_calculateQuote_perMinute_shouldRoundUpPartialMinutes() {
    let config = PricingConfig {
        model: PricingModel::PerMinute,
        rate_per_minute: 40.0,
        minimum_fee: 0.0,
        ..PricingConfig::default()
    };

    let quote = calculate_quote(151, 151.0 / 150.0, "1 min 0 sec", &config);
    assert_eq!(quote.base_price, 80.0);
    assert_eq!(quote.final_price, 80.0);
    assert!(!quote.includes_minimum_fee);
}

#[test]
fn test_calculateQuote_atMinimumFee_shouldNotFlagMinimum() {
    let config = PricingConfig::default();
    // 500 words * $0.10 equals the $50 minimum exactly
    let quote = calculate_quote(500, 500.0 / 150.0, "3 min 20 sec", &config);
    assert_eq!(quote.final_price, 50.0);
    assert!(!quote.includes_minimum_fee);
}

#[test]
fn test_quoteText_withWords_shouldPriceConfiguredModel() -> Result<()> {
    let controller = Controller::new_for_test()?;
    let quote = controller
        .quote_text(common::SAMPLE_SCRIPT, None)
        .expect("script has words");

    assert_eq!(quote.word_count, 24);
    assert_eq!(quote.pricing_model, PricingModel::PerWord);
    // 24 words at $0.10 is below the minimum
    assert!(quote.includes_minimum_fee);
    assert_eq!(format_currency(quote.final_price), "$50.00");
    assert_eq!(format_currency(quote.revision_price), "$75.00");
    Ok(())
}

#[test]
fn test_quoteText_withModelOverride_shouldUseOverride() -> Result<()> {
    let mut config = Config::default();
    config.pricing.project_rate = 450.0;
    let controller = Controller::with_config(config)?;

    let quote = controller
        .quote_text("Short and sweet.", Some(PricingModel::PerProject))
        .expect("text has words");
    assert_eq!(quote.pricing_model, PricingModel::PerProject);
    assert_eq!(quote.final_price, 450.0);
    Ok(())
}

#[test]
fn test_quoteText_withNoSpokenWords_shouldReturnNone() -> Result<()> {
    let controller = Controller::new_for_test()?;
    assert!(controller.quote_text("", None).is_none());
    assert!(controller.quote_text("... -- !!!", None).is_none());
    Ok(())
}

#[test]
fn test_quoteFile_withScript_shouldMatchQuoteText() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_script(temp_dir.path(), "spot.txt")?;
    let controller = Controller::new_for_test()?;

    let from_file = controller.quote_file(&path, None)?;
    let from_text = controller.quote_text(common::SAMPLE_SCRIPT, None);
    assert_eq!(from_file, from_text);
    Ok(())
}
