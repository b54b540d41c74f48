//! Roster management - the players currently online.

use std::collections::HashMap;

use crate::entities::{Player, PlayerId};

/// Online players in join order. The first player is the administrator.
#[derive(Debug, Clone)]
pub struct Roster {
    admin: PlayerId,
    players: HashMap<PlayerId, Player>,
    join_order: Vec<PlayerId>,
}

impl Roster {
    /// Create a roster with the administrator as its only player.
    pub fn new(admin: Player) -> Self {
        let admin_id = admin.id();
        Self {
            admin: admin_id,
            players: HashMap::from([(admin_id, admin)]),
            join_order: vec![admin_id],
        }
    }

    /// Add a player to the roster.
    pub fn add(&mut self, player: Player) -> PlayerId {
        let id = player.id();
        if self.players.insert(id, player).is_none() {
            self.join_order.push(id);
        }
        id
    }

    pub fn admin_id(&self) -> PlayerId {
        self.admin
    }

    pub fn admin(&self) -> &Player {
        &self.players[&self.admin]
    }

    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(&id)
    }

    pub fn get_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(&id)
    }

    /// Players in the order they joined.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.join_order.iter().filter_map(|id| self.players.get(id))
    }

    pub fn find_by_nickname(&self, nickname: &str) -> Option<&Player> {
        self.iter().find(|player| player.nickname() == nickname)
    }
}
