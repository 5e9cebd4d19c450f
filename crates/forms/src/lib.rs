//! Declarative interactive forms for remote actors.
//!
//! A form is built with a fluent builder, encoded into the JSON schema of the
//! rendering client and handed to the actor's transport. The raw answer comes
//! back through [`Form::submit`], which decodes it and invokes the callback
//! registered for the chosen button, the submitted values or the close path.

pub mod coerce;
pub mod custom;
pub mod decode;
pub mod err;
pub mod form;
pub mod menu;
pub mod modal;
pub mod response;
pub mod wire;

#[cfg(test)]
pub(crate) mod testing;

pub use custom::{CustomForm, Dropdown, Field, Slider, TextInput, Toggle};
pub use err::FormError;
pub use form::{Action, Actor, Form, FormKind, Outcome, PendingForm};
pub use menu::{MenuButton, MenuForm};
pub use modal::{ModalChoice, ModalForm};
pub use response::Response;

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;
    use crate::testing::{record, Player};

    #[test]
    fn test_send() {
        let player = Player::default();
        MenuForm::<Player>::new("Menu", "")
            .button("A", record("A"))
            .send(&player)
            .unwrap();
        CustomForm::<Player>::new("Settings")
            .toggle("PvP")
            .on_close(record("close"))
            .send(&player)
            .unwrap();
        ModalForm::<Player>::new("Teleport", "")
            .button1("Yes", record("yes"))
            .send(&player)
            .unwrap();

        let shown = player.take_shown();
        let kinds = shown.iter().map(|form| form.kind()).collect::<Vec<_>>();
        assert_eq!(kinds, vec![FormKind::Menu, FormKind::Custom, FormKind::Modal]);
        assert_eq!(format!("{:?}", shown[1]), "custom_form[Settings]");

        let mut tx = vec![];
        let outcomes = shown
            .into_iter()
            .zip([&b"0"[..], &b""[..], &b"true"[..]])
            .map(|(form, data)| form.submit(&player, &mut tx, data).unwrap())
            .collect::<Vec<_>>();
        assert_eq!(
            outcomes,
            vec![
                Outcome::Button(0),
                Outcome::Closed,
                Outcome::Modal(ModalChoice::First)
            ]
        );
        assert_eq!(tx, vec!["A", "close", "yes"]);
    }

    #[test]
    fn test_direct_close() {
        let player = Player::default();
        let forms: Vec<PendingForm<Player>> = vec![
            Box::new(MenuForm::<Player>::new("Menu", "").on_close(record("menu"))),
            Box::new(CustomForm::<Player>::new("Settings").on_close(record("custom"))),
            Box::new(ModalForm::<Player>::new("Teleport", "").on_close(record("modal"))),
            Box::new(ModalForm::<Player>::new("Silent", "")),
        ];
        let mut tx = vec![];
        for form in forms {
            form.close(&player, &mut tx);
        }
        assert_eq!(tx, vec!["menu", "custom", "modal"]);
    }

    #[test]
    fn test_custom_round_trip() {
        for count in 0..9usize {
            let form = (0..count).fold(CustomForm::<Player>::new("Round"), |form, idx| {
                match idx % 4 {
                    0 => form.dropdown(format!("f{}", idx), ["a", "b", "c"]),
                    1 => form.toggle(format!("f{}", idx)),
                    2 => form.slider(format!("f{}", idx), 0, 100, 1),
                    _ => form.input(format!("f{}", idx), ""),
                }
            });
            let encoded = form.to_json().unwrap();
            let content = encoded["content"].as_array().unwrap();
            assert_eq!(content.len(), count);

            let values = content
                .iter()
                .enumerate()
                .map(|(idx, field)| match field["type"].as_str().unwrap() {
                    "dropdown" => json!(idx % 3),
                    "toggle" => json!(true),
                    "slider" => json!(idx as f64 + 0.5),
                    _ => json!(format!("v{}", idx)),
                })
                .collect::<Vec<Value>>();

            let form = form.on_submit(move |_, tx: &mut Vec<String>, response| {
                for idx in 0..count {
                    let label = response.field(idx).unwrap().label().to_string();
                    let value = match idx % 4 {
                        0 => response.dropdown_option(idx).to_string(),
                        1 => response.toggle_value(idx).to_string(),
                        2 => response.slider_value(idx).to_string(),
                        _ => response.text_value(idx).to_string(),
                    };
                    tx.push(format!("{}={}", label, value));
                }
            });

            let mut tx = vec![];
            let data = serde_json::to_vec(&values).unwrap();
            let outcome = Box::new(form)
                .submit(&Player::default(), &mut tx, &data)
                .unwrap();
            assert_eq!(outcome, Outcome::Submitted);

            let expected = (0..count)
                .map(|idx| {
                    let value = match idx % 4 {
                        0 => ["a", "b", "c"][idx % 3].to_string(),
                        1 => "true".to_string(),
                        2 => idx.to_string(),
                        _ => format!("v{}", idx),
                    };
                    format!("f{}={}", idx, value)
                })
                .collect::<Vec<_>>();
            assert_eq!(tx, expected);
        }
    }
}
