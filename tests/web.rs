// Browser tests for the DOM board. Run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement};

use extenso_match::{GameConfig, ROUND_SIZE, drop_on_cell, words_for};

wasm_bindgen_test_configure!(run_in_browser);

fn doc() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn count(selector: &str) -> u32 {
    doc()
        .query_selector_all(selector)
        .map(|list| list.length())
        .unwrap_or(0)
}

fn element(id: &str) -> Option<Element> {
    doc().get_element_by_id(id)
}

fn score_text() -> Option<String> {
    element("score").and_then(|el| el.text_content())
}

// Value shown on board cell `index`, read back from the page.
fn answer(index: usize) -> u8 {
    element(&format!("cell-{index}"))
        .and_then(|el| el.get_attribute("data-answer"))
        .and_then(|v| v.parse().ok())
        .unwrap()
}

#[wasm_bindgen_test]
fn start_game_renders_board_and_tray() {
    extenso_match::start_game().unwrap();
    assert_eq!(count("#board .cell"), 9);
    assert_eq!(count("#pieces .piece"), 9);
    assert_eq!(count("#pieces .piece .label"), 9);
}

#[wasm_bindgen_test]
fn cells_show_uppercase_words() {
    extenso_match::start_game().unwrap();
    for index in 0..ROUND_SIZE {
        let cell = element(&format!("cell-{index}")).unwrap();
        let expected = words_for(answer(index)).unwrap().to_uppercase();
        assert_eq!(cell.text_content().as_deref(), Some(expected.as_str()));
    }
}

#[wasm_bindgen_test]
fn matching_drop_reveals_cell_and_removes_piece() {
    extenso_match::start_game().unwrap();
    drop_on_cell(5, Some(answer(5)), Some(5)).unwrap();

    let cell: HtmlElement = element("cell-5").unwrap().dyn_into().unwrap();
    assert!(cell.class_list().contains("correct"));
    assert_eq!(cell.text_content().as_deref(), Some(""));
    let position = cell.style().get_property_value("background-position").unwrap();
    assert_eq!(position, "100% 50%");
    assert!(element("piece-5").is_none());
    assert_eq!(count("#pieces .piece"), 8);
    assert_eq!(score_text().as_deref(), Some("Pontuação: 10"));
}

#[wasm_bindgen_test]
fn wrong_drop_costs_points() {
    extenso_match::start_game().unwrap();
    drop_on_cell(0, Some(answer(1)), Some(1)).unwrap();
    assert_eq!(score_text().as_deref(), Some("Pontuação: -5"));
    assert!(element("piece-1").is_some());

    // No readable value and no tracked tile still counts as a miss.
    drop_on_cell(0, None, None).unwrap();
    assert_eq!(score_text().as_deref(), Some("Pontuação: -10"));
}

#[wasm_bindgen_test]
fn full_board_celebrates() {
    extenso_match::start_game().unwrap();
    for index in 0..ROUND_SIZE {
        drop_on_cell(index, Some(answer(index)), Some(index)).unwrap();
    }
    let board = element("board").unwrap();
    assert!(board.class_list().contains("victory"));
    assert_eq!(count(".confetti"), GameConfig::default().confetti_count as u32);
    assert_eq!(count("#pieces .piece"), 0);
    assert_eq!(score_text().as_deref(), Some("Pontuação: 90"));
}

#[wasm_bindgen_test]
fn restart_replaces_the_round() {
    extenso_match::start_game().unwrap();
    drop_on_cell(0, Some(answer(0)), Some(0)).unwrap();
    extenso_match::restart_game().unwrap();
    assert_eq!(count("#board .cell"), 9);
    assert_eq!(count("#board .correct"), 0);
    assert_eq!(count("#pieces .piece"), 9);
    assert_eq!(score_text().as_deref(), Some("Pontuação: 0"));
}

#[wasm_bindgen_test]
fn words_for_rejects_numbers_outside_the_board_range() {
    assert_eq!(extenso_match::words_for_js(42.0).unwrap(), "quarenta e dois");
    assert!(extenso_match::words_for_js(300.0).is_err());
    assert!(extenso_match::words_for_js(-1.0).is_err());
    assert!(extenso_match::words_for_js(150.0).is_err());
}

#[wasm_bindgen_test]
fn console_level_follows_the_round_config() {
    extenso_match::logger::init_console_logger(tracing::Level::INFO);
    assert!(extenso_match::logger::set_console_level(tracing::Level::DEBUG));
}
