use lingo_i18n::{Message, TranslationTable};
use lingo_markup::{parse, strip, Color, Style};
use pretty_assertions::assert_eq;

fn table() -> TranslationTable {
    TranslationTable::parse(
        r#"
prefix: "<dark_gray>[<gold>Lobby<dark_gray>]"
translations:
  balance:
    en:
      - "<gray>Balance: <green>{amount}</green> coins"
      - "<gray>Tip: use <yellow>/pay"
"#,
    )
    .expect("fixture parses")
}

#[test]
fn resolved_message_renders_line_by_line() {
    let msg = Message::new("balance", "en_GB")
        .prefixed()
        .arg("amount", 42)
        .resolve(&table());
    let rich = parse(msg.text());

    assert_eq!(rich.line_count(), 2);
    assert_eq!(rich.lines[0].text, "[Lobby] Balance: 42 coins");
    assert_eq!(rich.lines[1].text, "[Lobby] Tip: use /pay");

    let amount = rich.lines[0]
        .segments()
        .find(|(text, _)| *text == "42")
        .map(|(_, style)| style);
    assert_eq!(amount, Some(Style::default().with_color(Color::GREEN)));
}

#[test]
fn missing_notice_strips_to_readable_text() {
    let msg = Message::new("absent", "en").resolve(&table());
    assert_eq!(strip(msg.text()), "No Message for key \"absent\"!");
}

#[test]
fn placeholder_values_with_tags_are_rendered() {
    let msg = Message::new("balance", "en")
        .arg("amount", "<red>-5</red>")
        .resolve(&table());
    assert_eq!(
        strip(msg.text()).lines().next(),
        Some("Balance: -5 coins")
    );
}
