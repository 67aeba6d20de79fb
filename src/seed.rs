//! Demo data for local runs: four teams, a handful of players, and one
//! draft auction covering the full roster.

use engine::Auction;
use store::{AuctionStore, MemoryStore};
use types::{AuctionId, Money, Player, PlayerId, Team, TeamId};

pub fn seed_demo_data(store: &MemoryStore) {
    let teams = [
        ("Team Alpha", "John Doe", "CSE 1"),
        ("Team Beta", "Jane Roe", "CSE 2"),
        ("Team Gamma", "Alex Kim", "CSE 3"),
        ("Team Delta", "Priya Shah", "CSE 4"),
    ];
    for (i, (name, owner, batch)) in teams.into_iter().enumerate() {
        store.insert_team(Team {
            id: TeamId(i as u64 + 1),
            name: name.into(),
            owner: owner.into(),
            batch: batch.into(),
        });
    }

    let players = [
        ("Sam Cole", "CSE 2", "Striker (ST)", 1000.0),
        ("Ravi Nair", "CSE 1", "Goalkeeper (GK)", 500.0),
        ("Leo Park", "CSE 3", "Centre Back (CB)", 800.0),
        ("Omar Diaz", "CSE 4", "Central Midfielder (CM)", 1200.0),
        ("Nick Bauer", "CSE 1", "Right Winger (RW)", 900.0),
        ("Ivan Petrov", "CSE 2", "Left Back (LB)", 600.0),
    ];
    let mut roster = Vec::with_capacity(players.len());
    for (i, (name, batch, position, base)) in players.into_iter().enumerate() {
        let id = PlayerId(i as u64 + 1);
        roster.push(id);
        store.insert_player(Player {
            id,
            name: name.into(),
            batch: batch.into(),
            position: position.into(),
            base_price: Money::from_float(base),
            photo: None,
        });
    }

    store.insert_auction(Auction::new(AuctionId(1), "Season Draft", roster));
}
