//! Browser adapter: canvas, `<audio>` cues, fetch, DOM wiring and the
//! `requestAnimationFrame` loop that drives `GameView::tick`.

mod audio;
mod canvas;
mod client;

use std::cell::RefCell;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, HtmlInputElement, window,
};

use audio::DomAudio;
use canvas::CanvasSurface;

use crate::animation::{AnimationToken, TickOutcome};
use crate::config::GameConfig;
use crate::drop_request::{DropOutcome, DropRequest};
use crate::geometry::BoardGeometry;
use crate::path::MoveSequence;
use crate::view::GameView;

struct Game {
    view: GameView<CanvasSurface, DomAudio>,
    active: Option<AnimationToken>,
    frame_pending: bool,
}

impl Game {
    /// Builds the path for `moves` and hands it to the frame loop, replacing
    /// any drop still animating.
    fn begin_drop(&mut self, moves: &MoveSequence, reported_slot: Option<usize>) {
        if let Err(err) = moves.check(self.view.geometry()) {
            gloo::console::warn!("plinko: drop moves break the endpoint contract:", err.to_string());
        }
        let path = self.view.build_path(moves);
        if let Some(slot) = reported_slot {
            if slot != path.landing_column() {
                gloo::console::warn!(
                    "plinko: endpoint slot",
                    slot,
                    "differs from path landing column",
                    path.landing_column()
                );
            }
        }
        self.active = Some(self.view.animate(path));
        if !self.frame_pending {
            self.frame_pending = request_frame();
        }
    }
}

thread_local! {
    static GAME: RefCell<Option<Game>> = const { RefCell::new(None) };
    static FRAME: RefCell<Option<Closure<dyn FnMut(f64)>>> = const { RefCell::new(None) };
}

// --- Frame loop --------------------------------------------------------------

fn request_frame() -> bool {
    let Some(win) = window() else { return false };
    FRAME.with(|frame| {
        let mut frame = frame.borrow_mut();
        let cb = frame.get_or_insert_with(|| {
            Closure::wrap(Box::new(on_frame) as Box<dyn FnMut(f64)>)
        });
        win.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok()
    })
}

fn on_frame(_ts: f64) {
    GAME.with(|cell| {
        let mut slot = cell.borrow_mut();
        let Some(game) = slot.as_mut() else { return };
        game.frame_pending = false;
        let Some(token) = game.active else { return };
        match game.view.tick(token) {
            TickOutcome::Continue => game.frame_pending = request_frame(),
            TickOutcome::Finished | TickOutcome::Superseded => game.active = None,
        }
    });
}

// --- DOM helpers ---------------------------------------------------------------

fn document() -> Result<Document, JsValue> {
    window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))
}

fn element<T: JsCast>(doc: &Document, id: &str) -> Result<T, JsValue> {
    doc.get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("element #{id} has unexpected type")))
}

fn alert(message: &str) {
    if let Some(win) = window() {
        win.alert_with_message(message).ok();
    }
}

fn set_text(doc: &Document, id: &str, text: &str) {
    if let Some(el) = doc.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

fn fit_bet_input(input: &HtmlInputElement) {
    let width = (input.value().chars().count() + 1) * 16;
    input.style().set_property("width", &format!("{width}px")).ok();
}

fn with_game<R>(f: impl FnOnce(&mut Game) -> R) -> Option<R> {
    GAME.with(|cell| cell.borrow_mut().as_mut().map(f))
}

// --- Entry points ----------------------------------------------------------------

pub(crate) fn start(config: GameConfig) -> Result<(), JsValue> {
    let doc = document()?;
    let geometry = BoardGeometry::classic();

    let canvas: HtmlCanvasElement = element(&doc, &config.canvas_id)?;
    canvas.set_width(geometry.width as u32);
    canvas.set_height(geometry.height as u32);
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into()?;

    let audio = DomAudio::from_document(&doc, &config.peg_sound_id, &config.slot_sound_id);
    let mut view = GameView::new(geometry, CanvasSurface::new(ctx), audio)
        .with_speed(config.speed)?;
    view.draw_idle();

    wire_controls(&doc, &config)?;
    gloo::console::log!("plinko: board ready,", geometry.rows, "rows");
    GAME.with(|cell| {
        cell.replace(Some(Game { view, active: None, frame_pending: false }));
    });
    Ok(())
}

fn wire_controls(doc: &Document, config: &GameConfig) -> Result<(), JsValue> {
    let bet: HtmlInputElement = element(doc, &config.bet_input_id)?;
    let play: HtmlElement = element(doc, &config.play_button_id)?;
    let all_in: HtmlElement = element(doc, &config.all_in_button_id)?;

    {
        let bet = bet.clone();
        let endpoint = config.endpoint.clone();
        let balance_id = config.balance_id.clone();
        let result_id = config.result_id.clone();
        EventListener::new(&play, "click", move |_event| {
            let request = match DropRequest::from_input(&bet.value()) {
                Ok(req) => req,
                Err(err) => return alert(&err.to_string()),
            };
            let endpoint = endpoint.clone();
            let balance_id = balance_id.clone();
            let result_id = result_id.clone();
            spawn_local(async move {
                match client::request_drop(&endpoint, request).await {
                    Ok(outcome) => show_outcome(&outcome, &balance_id, &result_id),
                    Err(err) => {
                        gloo::console::warn!("plinko: drop failed:", err.to_string());
                        alert(&err.to_string());
                    }
                }
            });
        })
        .forget();
    }

    {
        let bet = bet.clone();
        let balance_id = config.balance_id.clone();
        let doc = doc.clone();
        EventListener::new(&all_in, "click", move |_event| {
            let balance = doc
                .get_element_by_id(&balance_id)
                .and_then(|el| el.text_content())
                .unwrap_or_default();
            bet.set_value(balance.trim());
            fit_bet_input(&bet);
        })
        .forget();
    }

    {
        let input = bet.clone();
        EventListener::new(&bet, "input", move |_event| fit_bet_input(&input)).forget();
    }
    fit_bet_input(&bet);
    Ok(())
}

fn show_outcome(outcome: &DropOutcome, balance_id: &str, result_id: &str) {
    if let Ok(doc) = document() {
        set_text(&doc, result_id, &outcome.summary());
        set_text(&doc, balance_id, &outcome.balance.to_string());
    }
    with_game(|game| game.begin_drop(&outcome.moves, Some(outcome.slot)));
}

/// Animates a move sequence obtained outside the Play button flow.
pub(crate) fn animate_moves(moves: MoveSequence) -> Result<(), JsValue> {
    with_game(|game| game.begin_drop(&moves, None))
        .ok_or_else(|| JsValue::from_str("game not started"))
}

#[cfg(feature = "rng")]
pub(crate) fn demo_drop() -> Result<(), JsValue> {
    let moves = with_game(|game| crate::path::random_moves(game.view.geometry()))
        .ok_or_else(|| JsValue::from_str("game not started"))?
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    gloo::console::log!("plinko: demo drop", serde_json::to_string(&moves).unwrap_or_default());
    animate_moves(moves)
}
