use eyre::Context as _;
use form_transport::{ActorId, Envelope, FormHub};
use forms::{Actor, FormError, PendingForm};
use log::{error, info, warn, LevelFilter, Log};
use tokio::io::{AsyncBufReadExt as _, BufReader};

mod screens;

pub struct Player {
    id: ActorId,
    name: String,
    hub: FormHub<Player>,
}

impl Actor for Player {
    type Tx = World;

    fn send_form(&self, form: PendingForm<Self>) -> Result<(), FormError> {
        self.hub.show(self.id, form)
    }
}

pub struct World {
    nickname: String,
    class: String,
    pvp: bool,
    level: i64,
    left: bool,
}

impl World {
    fn new(nickname: &str) -> World {
        World {
            nickname: nickname.to_string(),
            class: screens::CLASSES[0].to_string(),
            pvp: false,
            level: 1,
            left: false,
        }
    }
}

fn render(envelope: &Envelope, pretty: bool) -> eyre::Result<String> {
    if !pretty {
        return Ok(String::from_utf8_lossy(&envelope.payload).into_owned());
    }
    let value: serde_json::Value =
        serde_json::from_slice(&envelope.payload).context("Failed to parse payload")?;
    Ok(serde_json::to_string_pretty(&value)?)
}

fn logger(filters: &str) -> (Box<dyn Log>, LevelFilter) {
    let logger = pretty_env_logger::formatted_builder()
        .parse_filters(filters)
        .build();
    let level = logger.filter();
    (Box::new(logger), level)
}

fn init_logger(filters: &str) -> eyre::Result<()> {
    let (logger, level) = logger(filters);
    log::set_boxed_logger(logger).context("Failed to install logger")?;
    log::set_max_level(level);
    Ok(())
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let env = env::Env::load()?;
    init_logger(env.rust_log())?;
    color_eyre::install()?;

    let (hub, mut outbox) = FormHub::new();
    let player = Player {
        id: 1,
        name: env.player().to_string(),
        hub: hub.clone(),
    };
    let mut world = World::new(env.player());
    info!("Starting simulation for {}", player.name);
    screens::main_menu(&world).send(&player)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(envelope) = outbox.try_recv() {
        println!("[{}] {}", envelope.kind, render(&envelope, env.pretty())?);
        println!("response (empty line closes the form):");

        let line = match lines.next_line().await? {
            Some(line) => line,
            None => {
                hub.disconnect(player.id, &player, &mut world);
                break;
            }
        };
        match hub.deliver(envelope.actor, &player, &mut world, line.as_bytes()) {
            Ok(Some(outcome)) => info!("{:?}", outcome),
            Ok(None) => warn!("Nothing to answer"),
            Err(err) => error!("Failed to handle response: {:#}", err),
        }
        if world.left {
            break;
        }
    }

    info!(
        "{} the {}: level {}, pvp {}",
        world.nickname, world.class, world.level, world.pvp
    );
    Ok(())
}
