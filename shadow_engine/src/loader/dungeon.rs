//! The Shadow Dungeon.
//!
//! Three rooms in a line: a locked chamber, a treasury holding the password, and the
//! arena where the Dark Warrior waits.

use shadow_data::{
    EnemyDef, ExitDef, GameDef, ItemDef, LocationRef, LockDef, PlayerDef, RoomDef, WorldDef,
};

use crate::config::GameConfig;

pub const CHAMBER: &str = "chamber";
pub const TREASURY: &str = "treasury";
pub const ARENA: &str = "arena";
pub const KEY: &str = "key";
pub const NOTE: &str = "note";

const INTRO: &str = "You awaken in a mysterious chamber with no memory of how you arrived here. \
Your only choice is to venture forward and discover what lies ahead...\n\n\
Type 'help' for a list of commands.";

fn exit(direction: &str, to: &str) -> ExitDef {
    ExitDef {
        direction: direction.to_string(),
        to: to.to_string(),
        lock: None,
    }
}

/// Author the dungeon, tuned by `config`.
pub fn shadow_dungeon(config: &GameConfig) -> WorldDef {
    let chamber = RoomDef {
        id: CHAMBER.into(),
        name: "Starting Chamber".into(),
        desc: "You find yourself in a dimly lit stone chamber. The walls are cold and damp. \
A heavy wooden door stands to the north."
            .into(),
        exits: vec![ExitDef {
            lock: Some(LockDef {
                key_item: KEY.into(),
                password: config.password.clone(),
                case_sensitive: config.case_sensitive_password,
            }),
            ..exit("north", TREASURY)
        }],
    };
    let treasury = RoomDef {
        id: TREASURY.into(),
        name: "Treasury Room".into(),
        desc: "You enter a magnificent treasury filled with ancient artifacts and golden treasures. \
The room sparkles with an otherworldly glow."
            .into(),
        exits: vec![exit("south", CHAMBER), exit("north", ARENA)],
    };
    let arena = RoomDef {
        id: ARENA.into(),
        name: "Enemy Arena".into(),
        desc: "You step into a vast arena. The air is thick with tension. \
A menacing shadow moves in the darkness ahead!"
            .into(),
        exits: vec![exit("south", TREASURY)],
    };

    let key = ItemDef {
        id: KEY.into(),
        name: "key".into(),
        desc: "A rusty iron key".into(),
        portable: true,
        location: LocationRef::Room(CHAMBER.into()),
        text: None,
    };
    let note = ItemDef {
        id: NOTE.into(),
        name: "note".into(),
        desc: "A weathered piece of parchment with writing on it".into(),
        portable: false,
        location: LocationRef::Room(TREASURY.into()),
        text: Some(format!("The password is: {}", config.password)),
    };

    WorldDef {
        game: GameDef {
            title: "The Shadow Dungeon".into(),
            intro: INTRO.into(),
            player: PlayerDef {
                name: "Adventurer".into(),
                description: "A wanderer with no memory and a stubborn will.".into(),
                start_room: CHAMBER.into(),
                max_hp: config.player_max_hp,
                damage: config.player_damage,
            },
        },
        rooms: vec![chamber, treasury, arena],
        items: vec![key, note],
        enemy: Some(EnemyDef {
            id: "dark_warrior".into(),
            name: "Dark Warrior".into(),
            desc: "The enemy blocks your path. You must fight!".into(),
            room: ARENA.into(),
            max_hp: config.enemy_max_hp,
            damage: config.enemy_damage,
        }),
    }
}
