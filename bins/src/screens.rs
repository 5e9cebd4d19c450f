use forms::{CustomForm, Dropdown, MenuForm, ModalForm, Slider, TextInput, Toggle};
use log::{error, info};

use crate::{Player, World};

pub const CLASSES: [&str; 3] = ["Warrior", "Archer", "Mage"];

fn show_settings(player: &Player, world: &mut World) {
    if let Err(err) = settings(world).send(player) {
        error!("Failed to show settings: {:#}", err);
    }
}

fn show_main_menu(player: &Player, world: &mut World) {
    if let Err(err) = main_menu(world).send(player) {
        error!("Failed to show menu: {:#}", err);
    }
}

pub fn main_menu(world: &World) -> MenuForm<Player> {
    MenuForm::<Player>::new(
        "Main menu",
        format!(
            "{} the {} (level {})",
            world.nickname,
            world.class,
            world.level
        ),
    )
    .button_with_icon("Settings", "textures/ui/settings_glyph_color_2x", show_settings)
    .button("Leave", |player, _| {
        if let Err(err) = confirm_leave().send(player) {
            error!("Failed to show confirmation: {:#}", err);
        }
    })
    .on_close(|player, _| info!("{} closed the menu", player.name))
}

pub fn settings(world: &World) -> CustomForm<Player> {
    let class = CLASSES
        .iter()
        .position(|class| *class == world.class)
        .unwrap_or_default();
    CustomForm::<Player>::new("Settings")
        .field(Dropdown::new("Class", CLASSES).with_default(class))
        .field(Toggle::new("PvP").with_default(world.pvp))
        .field(Slider::new("Level", 1, 100, 1).with_default(world.level))
        .field(TextInput::new("Nickname", "Your name").with_default(world.nickname.clone()))
        .on_submit(|player, world, response| {
            let class = response.dropdown_option(0);
            if !class.is_empty() {
                world.class = class.to_string();
            }
            world.pvp = response.toggle_value(1);
            world.level = response.slider_value(2).clamp(1, 100);
            let nickname = response.text_value(3).trim();
            if !nickname.is_empty() {
                world.nickname = nickname.to_string();
            }
            info!("{} saved settings", player.name);
            show_main_menu(player, world);
        })
        .on_close(show_main_menu)
}

pub fn confirm_leave() -> ModalForm<Player> {
    ModalForm::<Player>::new("Leave", "Do you really want to leave?")
        .button1("Leave", |player, world| {
            info!("{} left", player.name);
            world.left = true;
        })
        .button2("Stay", show_main_menu)
        .on_close(show_main_menu)
}

#[cfg(test)]
mod tests {
    use form_transport::FormHub;
    use forms::FormKind;

    use super::*;

    fn session() -> (
        Player,
        World,
        tokio::sync::mpsc::UnboundedReceiver<form_transport::Envelope>,
    ) {
        let (hub, rx) = FormHub::new();
        let player = Player {
            id: 9,
            name: "alex".to_string(),
            hub,
        };
        (player, World::new("alex"), rx)
    }

    #[test]
    fn test_settings_update_world() {
        let (player, mut world, mut rx) = session();
        main_menu(&world).send(&player).unwrap();
        assert_eq!(rx.try_recv().unwrap().kind, FormKind::Menu);

        player.hub.deliver(9, &player, &mut world, b"0").unwrap();
        assert_eq!(rx.try_recv().unwrap().kind, FormKind::Custom);

        player
            .hub
            .deliver(9, &player, &mut world, br#"[2, true, 250.7, " Merlin "]"#)
            .unwrap();
        assert_eq!(world.class, "Mage");
        assert!(world.pvp);
        assert_eq!(world.level, 100);
        assert_eq!(world.nickname, "Merlin");
        assert_eq!(rx.try_recv().unwrap().kind, FormKind::Menu);
    }

    #[test]
    fn test_settings_defaults_follow_world() {
        let (_, mut world, _) = session();
        world.class = "Archer".to_string();
        world.level = 12;
        let content = forms::Form::to_json(&settings(&world)).unwrap()["content"].clone();
        assert_eq!(content[0]["default"], 1);
        assert_eq!(content[2]["default"], 12);
        assert_eq!(content[3]["default"], "alex");
        assert!(content[1].get("default").is_none());
    }

    #[test]
    fn test_leave() {
        let (player, mut world, mut rx) = session();
        main_menu(&world).send(&player).unwrap();
        player.hub.deliver(9, &player, &mut world, b"1").unwrap();
        assert_eq!(rx.try_recv().unwrap().kind, FormKind::Menu);
        assert_eq!(rx.try_recv().unwrap().kind, FormKind::Modal);

        player.hub.deliver(9, &player, &mut world, b"false").unwrap();
        assert!(!world.left);
        assert_eq!(rx.try_recv().unwrap().kind, FormKind::Menu);

        player.hub.deliver(9, &player, &mut world, b"1").unwrap();
        rx.try_recv().unwrap();
        player.hub.deliver(9, &player, &mut world, b"true").unwrap();
        assert!(world.left);
        assert!(rx.try_recv().is_err());
    }
}
