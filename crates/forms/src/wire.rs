//! Encoded forms as the rendering client expects them.
//!
//! Field defaults equal to the client's own default are left out of the
//! object. Each omission is an explicit predicate below, so a default that
//! genuinely equals the zero value (a slider resting at 0, for example) is
//! still dropped and the client falls back to its own default.

use serde::Serialize;

const ICON_PATH: &str = "path";

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum WireForm<'a> {
    #[serde(rename = "form")]
    Menu {
        title: &'a str,
        content: &'a str,
        buttons: Vec<WireButton<'a>>,
    },
    #[serde(rename = "custom_form")]
    Custom {
        title: &'a str,
        content: Vec<WireField<'a>>,
    },
    #[serde(rename = "modal")]
    Modal {
        title: &'a str,
        content: &'a str,
        button1: &'a str,
        button2: &'a str,
    },
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct WireButton<'a> {
    pub text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<WireImage<'a>>,
}

impl<'a> WireButton<'a> {
    pub fn new(text: &'a str, icon: &'a str) -> WireButton<'a> {
        WireButton {
            text,
            image: if icon.is_empty() {
                None
            } else {
                Some(WireImage {
                    kind: ICON_PATH,
                    data: icon,
                })
            },
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct WireImage<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: &'a str,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WireField<'a> {
    Dropdown {
        text: &'a str,
        options: &'a [String],
        #[serde(skip_serializing_if = "omit_index")]
        default: usize,
    },
    Toggle {
        text: &'a str,
        #[serde(skip_serializing_if = "omit_toggle")]
        default: bool,
    },
    Slider {
        text: &'a str,
        min: i64,
        max: i64,
        step: i64,
        #[serde(skip_serializing_if = "omit_slider")]
        default: i64,
    },
    Input {
        text: &'a str,
        placeholder: &'a str,
        #[serde(skip_serializing_if = "omit_text")]
        default: &'a str,
    },
}

fn omit_index(default: &usize) -> bool {
    *default == 0
}

fn omit_toggle(default: &bool) -> bool {
    !*default
}

fn omit_slider(default: &i64) -> bool {
    *default == 0
}

fn omit_text(default: &&str) -> bool {
    default.is_empty()
}
