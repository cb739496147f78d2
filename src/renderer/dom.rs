//! DOM renderer: moves sprite elements with CSS transforms

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

use super::{PositionSink, translate_css};
use crate::settings::CharacterSkin;

pub struct DomRenderer {
    player: HtmlElement,
    adversary: HtmlElement,
}

impl DomRenderer {
    /// Look up the `#player` and `#adversary` elements
    pub fn new(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            player: sprite_element(document, "player")?,
            adversary: sprite_element(document, "adversary")?,
        })
    }

    pub fn set_player_skin(&self, skin: &CharacterSkin) -> Result<(), JsValue> {
        let style = self.player.style();
        match skin {
            CharacterSkin::Image(url) => {
                style.set_property("background-image", &format!("url('{}')", url))?;
                style.set_property("background-color", "transparent")?;
            }
            CharacterSkin::Color(color) => {
                style.set_property("background-color", color)?;
                style.set_property("background-image", "none")?;
            }
        }
        Ok(())
    }

    pub fn set_adversary_image(&self, url: &str) -> Result<(), JsValue> {
        self.adversary
            .style()
            .set_property("background-image", &format!("url('{}')", url))
    }
}

impl PositionSink for DomRenderer {
    fn apply_position(&mut self, element_id: &str, pos: Vec2) {
        let element = match element_id {
            "player" => &self.player,
            "adversary" => &self.adversary,
            other => {
                log::warn!("Unknown sprite element: {}", other);
                return;
            }
        };
        if let Err(e) = element.style().set_property("transform", &translate_css(pos)) {
            log::warn!("Failed to move #{}: {:?}", element_id, e);
        }
    }
}

fn sprite_element(document: &Document, id: &str) -> Result<HtmlElement, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{}", id)))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str(&format!("#{} is not an HTML element", id)))
}
