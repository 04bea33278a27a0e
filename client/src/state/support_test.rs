use super::*;

#[test]
fn starts_on_amount_step_with_nothing_chosen() {
    let wizard = SupportWizard::new();
    assert_eq!(wizard.step, SupportStep::Amount);
    assert_eq!(wizard.amount_cents, None);
    assert!(!wizard.step_complete());
}

#[test]
fn cannot_advance_without_amount() {
    let mut wizard = SupportWizard::new();
    assert!(!wizard.advance());
    assert_eq!(wizard.step, SupportStep::Amount);
}

#[test]
fn preset_choice_enables_advance() {
    let mut wizard = SupportWizard::new();
    wizard.choose_preset(500);
    assert_eq!(wizard.amount_cents, Some(500));
    assert!(wizard.advance());
    assert_eq!(wizard.step, SupportStep::Details);
}

#[test]
fn unknown_preset_is_ignored() {
    let mut wizard = SupportWizard::new();
    wizard.choose_preset(123);
    assert_eq!(wizard.amount_cents, None);
}

#[test]
fn custom_amount_parses_whole_euros() {
    let mut wizard = SupportWizard::new();
    wizard.set_custom_amount("7");
    assert_eq!(wizard.amount_cents, Some(700));
}

#[test]
fn custom_amount_out_of_range_blocks() {
    let mut wizard = SupportWizard::new();
    wizard.set_custom_amount("0");
    assert_eq!(wizard.amount_cents, None);
    wizard.set_custom_amount("9999");
    assert_eq!(wizard.amount_cents, None);
    assert!(!wizard.advance());
}

#[test]
fn custom_amount_garbage_blocks_but_keeps_text() {
    let mut wizard = SupportWizard::new();
    wizard.set_custom_amount("five");
    assert_eq!(wizard.amount_cents, None);
    assert_eq!(wizard.custom_amount, "five");
}

#[test]
fn preset_clears_previous_custom_text() {
    let mut wizard = SupportWizard::new();
    wizard.set_custom_amount("7");
    wizard.choose_preset(300);
    assert_eq!(wizard.amount_cents, Some(300));
    assert!(wizard.custom_amount.is_empty());
}

#[test]
fn full_walkthrough_reaches_confirm() {
    let mut wizard = SupportWizard::new();
    wizard.choose_preset(1000);
    assert!(wizard.advance());
    wizard.name = "Mara".to_owned();
    wizard.message = "Keep writing!".to_owned();
    assert!(wizard.advance());
    assert_eq!(wizard.step, SupportStep::Confirm);
    // Advancing from Confirm changes nothing.
    assert!(!wizard.advance());
    assert_eq!(wizard.step, SupportStep::Confirm);
}

#[test]
fn back_keeps_entered_data() {
    let mut wizard = SupportWizard::new();
    wizard.choose_preset(500);
    wizard.advance();
    wizard.name = "Jonas".to_owned();
    wizard.advance();
    wizard.back();
    assert_eq!(wizard.step, SupportStep::Details);
    wizard.back();
    assert_eq!(wizard.step, SupportStep::Amount);
    assert_eq!(wizard.amount_cents, Some(500));
    assert_eq!(wizard.name, "Jonas");
}

#[test]
fn display_name_defaults_to_anonymous() {
    let mut wizard = SupportWizard::new();
    assert_eq!(wizard.display_name(), "Anonymous");
    wizard.name = "  Mara  ".to_owned();
    assert_eq!(wizard.display_name(), "Mara");
}
