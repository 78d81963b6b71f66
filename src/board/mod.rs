//! Drag-and-drop board in the DOM.
//!
//! The page provides (or we create) `#board`, `#pieces` and `#score`. Each
//! round fills the board with nine word cells and the tray with nine numeral
//! tiles; dropping a tile on a cell feeds a [`DropEvent`] to the current
//! [`GameSession`] and the returned effects are applied to the page here.
//! Drag listeners sit on the two containers, not on the cells and tiles.
//! Styling of `.cell`, `.piece`, `.label`, `.correct`, `.victory` and
//! `.confetti` is left to the host stylesheet.

use std::cell::{Cell, RefCell};

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, DragEvent, Element, HtmlAudioElement, HtmlElement, window};

use crate::config::GameConfig;
use crate::session::{Cue, DropEvent, Effect, GameSession, TileCrop};

pub mod confetti;

const BOARD_ID: &str = "board";
const PIECES_ID: &str = "pieces";
const SCORE_ID: &str = "score";
const START_ID: &str = "start";
const RESTART_ID: &str = "restart";

// DataTransfer formats carried by a dragged tile.
const VALUE_FORMAT: &str = "text/plain";
const PIECE_FORMAT: &str = "pieceIndex";

const INDEX_ATTR: &str = "data-index";
// Marks a container whose drag listeners are already attached.
const WIRED_ATTR: &str = "data-drag-wired";

/// Runtime board state: the session plus the page resources it drives.
struct BoardState {
    session: GameSession,
    match_cue: HtmlAudioElement,
    miss_cue: HtmlAudioElement,
    // Board index of the tile being dragged, if any.
    dragged_piece: Option<usize>,
}

thread_local! {
    static BOARD_STATE: RefCell<Option<BoardState>> = const { RefCell::new(None) };
    static CONTROLS_WIRED: Cell<bool> = const { Cell::new(false) };
}

fn document() -> Result<Document, JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

fn cell_id(index: usize) -> String {
    format!("cell-{index}")
}

fn piece_id(index: usize) -> String {
    format!("piece-{index}")
}

/// Start a round with `config`, replacing whatever is on the board.
pub fn start_board_mode(config: GameConfig) -> Result<(), JsValue> {
    crate::logger::set_console_level(config.level()?);
    let mut rng = rand::thread_rng();
    let session = GameSession::start(&config, &mut rng)?;
    install_session(session)
}

/// Start a new round with the configuration of the current one.
pub fn restart_board_mode() -> Result<(), JsValue> {
    let mut rng = rand::thread_rng();
    let next = BOARD_STATE.with(|cell| {
        cell.borrow()
            .as_ref()
            .map(|state| state.session.restart(&mut rng))
            .transpose()
    })?;
    match next {
        Some(session) => install_session(session),
        None => start_board_mode(GameConfig::default()),
    }
}

/// Current round, if a game is running.
#[cfg(feature = "serde_json")]
pub fn current_round_json() -> Result<Option<String>, JsValue> {
    BOARD_STATE.with(|cell| {
        cell.borrow()
            .as_ref()
            .map(|state| serde_json::to_string(state.session.round()))
            .transpose()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    })
}

fn install_session(session: GameSession) -> Result<(), JsValue> {
    let doc = document()?;
    let board = ensure_container(&doc, BOARD_ID)?;
    let pieces = ensure_container(&doc, PIECES_ID)?;
    let score = ensure_container(&doc, SCORE_ID)?;

    board.set_inner_html("");
    pieces.set_inner_html("");
    let _ = board.class_list().remove_1(confetti::VICTORY_CLASS);
    score.set_text_content(Some(&session.score_text()));

    render_cells(&doc, &board, &session)?;
    render_tray(&doc, &pieces, &session)?;
    wire_drag_listeners(&board, &pieces)?;

    let state = BoardState {
        match_cue: HtmlAudioElement::new_with_src(&session.config().match_sound_url)?,
        miss_cue: HtmlAudioElement::new_with_src(&session.config().miss_sound_url)?,
        session,
        dragged_piece: None,
    };
    BOARD_STATE.with(|b| b.replace(Some(state)));

    wire_controls(&doc)?;
    Ok(())
}

fn ensure_container(doc: &Document, id: &str) -> Result<Element, JsValue> {
    if let Some(el) = doc.get_element_by_id(id) {
        return Ok(el);
    }
    let body = doc.body().ok_or_else(|| JsValue::from_str("no body"))?;
    let div = doc.create_element("div")?;
    div.set_id(id);
    body.append_child(&div)?;
    Ok(div)
}

// --- Rendering ----------------------------------------------------------------

fn render_cells(doc: &Document, board: &Element, session: &GameSession) -> Result<(), JsValue> {
    for (index, pair) in session.round().iter().enumerate() {
        let cell = doc.create_element("div")?;
        cell.set_class_name("cell");
        cell.set_id(&cell_id(index));
        cell.set_text_content(Some(&pair.words().to_uppercase()));
        cell.set_attribute("data-answer", &pair.value().to_string())?;
        cell.set_attribute(INDEX_ATTR, &index.to_string())?;
        board.append_child(&cell)?;
    }
    Ok(())
}

fn render_tray(doc: &Document, pieces: &Element, session: &GameSession) -> Result<(), JsValue> {
    let image = format!("url({})", session.image_url());
    for (_, index) in session.placements().iter() {
        let Some(pair) = session.round().get(index) else {
            continue;
        };
        let value = pair.value();

        let piece: HtmlElement = doc.create_element("div")?.dyn_into()?;
        piece.set_class_name("piece");
        piece.set_id(&piece_id(index));
        piece.set_draggable(true);
        piece.set_attribute("data-answer", &value.to_string())?;
        piece.set_attribute(INDEX_ATTR, &index.to_string())?;
        paint_crop(&piece, &image, TileCrop::for_index(index))?;

        let label = doc.create_element("div")?;
        label.set_class_name("label");
        label.set_text_content(Some(&value.to_string()));
        piece.append_child(&label)?;

        pieces.append_child(&piece)?;
    }
    Ok(())
}

fn paint_crop(el: &HtmlElement, image: &str, crop: TileCrop) -> Result<(), JsValue> {
    let style = el.style();
    style.set_property("background-image", image)?;
    style.set_property("background-size", crop.background_size())?;
    style.set_property("background-position", &crop.background_position())?;
    Ok(())
}

// --- Input --------------------------------------------------------------------

/// Element matching `selector` that contains the event target, with its
/// `data-index`.
fn indexed_target(evt: &DragEvent, selector: &str) -> Option<(Element, usize)> {
    let target: Element = evt.target()?.dyn_into().ok()?;
    let el = target.closest(selector).ok()??;
    let index = el.get_attribute(INDEX_ATTR)?.parse().ok()?;
    Some((el, index))
}

/// Listen on the `#board` and `#pieces` containers once per page. Rounds only
/// replace the children, so no listener is created per cell or tile.
fn wire_drag_listeners(board: &Element, pieces: &Element) -> Result<(), JsValue> {
    if !board.has_attribute(WIRED_ATTR) {
        let over = Closure::wrap(Box::new(move |evt: DragEvent| {
            evt.prevent_default();
        }) as Box<dyn FnMut(_)>);
        board.add_event_listener_with_callback("dragover", over.as_ref().unchecked_ref())?;
        over.forget();

        let dropped = Closure::wrap(Box::new(move |evt: DragEvent| {
            evt.prevent_default();
            let Some((_, cell)) = indexed_target(&evt, ".cell") else {
                return;
            };
            if let Err(err) = on_drop(cell, &evt) {
                tracing::warn!(cell, error = ?err, "drop handling failed");
            }
        }) as Box<dyn FnMut(_)>);
        board.add_event_listener_with_callback("drop", dropped.as_ref().unchecked_ref())?;
        dropped.forget();

        board.set_attribute(WIRED_ATTR, "")?;
    }

    if !pieces.has_attribute(WIRED_ATTR) {
        let start = Closure::wrap(Box::new(move |evt: DragEvent| {
            let Some((piece, index)) = indexed_target(&evt, ".piece") else {
                return;
            };
            BOARD_STATE.with(|cell| {
                if let Some(state) = cell.borrow_mut().as_mut() {
                    state.dragged_piece = Some(index);
                }
            });
            if let Some(dt) = evt.data_transfer() {
                let value = piece.get_attribute("data-answer").unwrap_or_default();
                let _ = dt.set_data(VALUE_FORMAT, &value);
                let _ = dt.set_data(PIECE_FORMAT, &index.to_string());
            }
        }) as Box<dyn FnMut(_)>);
        pieces.add_event_listener_with_callback("dragstart", start.as_ref().unchecked_ref())?;
        start.forget();

        let end = Closure::wrap(Box::new(move |_evt: DragEvent| {
            BOARD_STATE.with(|cell| {
                if let Some(state) = cell.borrow_mut().as_mut() {
                    state.dragged_piece = None;
                }
            });
        }) as Box<dyn FnMut(_)>);
        pieces.add_event_listener_with_callback("dragend", end.as_ref().unchecked_ref())?;
        end.forget();

        pieces.set_attribute(WIRED_ATTR, "")?;
    }
    Ok(())
}

fn on_drop(cell: usize, evt: &DragEvent) -> Result<(), JsValue> {
    let dt = evt.data_transfer();
    let read = |format: &str| dt.as_ref().and_then(|dt| dt.get_data(format).ok());
    let dragged_value = read(VALUE_FORMAT).and_then(|s| s.trim().parse::<u8>().ok());
    let carried_piece = read(PIECE_FORMAT).and_then(|s| s.trim().parse::<usize>().ok());
    drop_on_cell(cell, dragged_value, carried_piece)
}

/// Score a tile landing on board cell `cell` and update the page, as a
/// mouse drop does. Touch or keyboard front-ends can call this directly.
/// Without `piece`, the tile tracked since `dragstart` is used.
pub fn drop_on_cell(
    cell: usize,
    dragged_value: Option<u8>,
    piece: Option<usize>,
) -> Result<(), JsValue> {
    BOARD_STATE.with(|state_cell| -> Result<(), JsValue> {
        let mut guard = state_cell.borrow_mut();
        let Some(state) = guard.as_mut() else {
            return Ok(());
        };
        let effects = state.session.handle_drop(DropEvent {
            cell,
            dragged_value,
            piece: piece.or(state.dragged_piece),
        })?;
        let doc = document()?;
        for effect in effects {
            apply_effect(&doc, state, effect)?;
        }
        Ok(())
    })
}

fn apply_effect(doc: &Document, state: &mut BoardState, effect: Effect) -> Result<(), JsValue> {
    match effect {
        Effect::PlayCue(cue) => {
            let audio = match cue {
                Cue::Match => &state.match_cue,
                Cue::Miss => &state.miss_cue,
            };
            // Autoplay may be refused; the game continues silently.
            let _ = audio.play();
        }
        Effect::ScoreChanged(_) => {
            if let Some(el) = doc.get_element_by_id(SCORE_ID) {
                el.set_text_content(Some(&state.session.score_text()));
            }
        }
        Effect::RevealCell { cell, crop } => {
            if let Some(el) = doc.get_element_by_id(&cell_id(cell)) {
                let el: HtmlElement = el.dyn_into()?;
                el.class_list().add_1("correct")?;
                el.set_text_content(Some(""));
                paint_crop(&el, &format!("url({})", state.session.image_url()), crop)?;
            }
        }
        Effect::RemovePiece { piece } => {
            if let Some(el) = doc.get_element_by_id(&piece_id(piece)) {
                el.remove();
            }
            state.dragged_piece = None;
        }
        Effect::Victory => {
            if let Some(board) = doc.get_element_by_id(BOARD_ID) {
                confetti::celebrate(doc, &board, state.session.config(), &mut rand::thread_rng())?;
            }
        }
    }
    Ok(())
}

// --- Controls -----------------------------------------------------------------

/// Hook `#start` and `#restart` once; both begin a new round.
fn wire_controls(doc: &Document) -> Result<(), JsValue> {
    if CONTROLS_WIRED.with(|w| w.replace(true)) {
        return Ok(());
    }
    for id in [START_ID, RESTART_ID] {
        let Some(button) = doc.get_element_by_id(id) else {
            continue;
        };
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            if let Err(err) = restart_board_mode() {
                tracing::warn!(error = ?err, "could not start a new round");
            }
        }) as Box<dyn FnMut(_)>);
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}
