//! Append-only game registry and capability check.

use std::fmt;

use log::debug;

use crate::game::{ErasedGame, GameAdapter, GameInfo};
use crate::Game;

/// Position of a game in registration order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GameKey(usize);

impl GameKey {
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for GameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How a game's requirements are matched against engine capabilities.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum CapabilityPolicy {
    /// Every feature tag and the `context:<revision>` tag must be advertised.
    #[default]
    Strict,
    /// Only the feature tags are checked.
    FeatureTagsOnly,
}

impl CapabilityPolicy {
    pub fn is_supported(self, info: &GameInfo, engine_tags: &[&str]) -> bool {
        let has = |tag: &str| engine_tags.contains(&tag);

        let features = info.feature_tags.iter().all(|tag| has(tag.as_str()));
        match self {
            CapabilityPolicy::FeatureTagsOnly => features,
            CapabilityPolicy::Strict => {
                features && has(format!("context:{}", info.context_revision).as_str())
            }
        }
    }
}

/// Menu-facing view of one registered game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameEntry {
    /// Pass to `Application::select` to pick this game.
    pub key: GameKey,
    pub name: String,
    pub description: String,
    /// The game owns the current session.
    pub running: bool,
    pub supported: bool,
    /// Resuming will rebuild the engine from scratch.
    pub will_restart: bool,
}

/// Registered games, in display order.
pub struct GameRegistry {
    games: Vec<Box<dyn ErasedGame>>,
    engine_tags: &'static [&'static str],
    policy: CapabilityPolicy,
}

impl GameRegistry {
    pub fn new(engine_tags: &'static [&'static str], policy: CapabilityPolicy) -> Self {
        Self { games: Vec::new(), engine_tags, policy }
    }

    pub fn register<G>(&mut self, game: G) -> GameKey
    where
        G: Game + 'static,
    {
        self.register_erased(Box::new(GameAdapter::new(game)))
    }

    pub fn register_erased(&mut self, game: Box<dyn ErasedGame>) -> GameKey {
        let key = GameKey(self.games.len());
        debug!("registered game {:?} as {key}", game.info().name);
        self.games.push(game);
        key
    }

    #[inline]
    pub fn policy(&self) -> CapabilityPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: CapabilityPolicy) {
        self.policy = policy;
    }

    pub fn get(&self, key: GameKey) -> Option<&dyn ErasedGame> {
        self.games.get(key.0).map(|g| g.as_ref())
    }

    pub fn is_supported(&self, key: GameKey) -> Option<bool> {
        self.get(key)
            .map(|g| self.policy.is_supported(g.info(), self.engine_tags))
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Builds the menu view of every game.
    pub fn entries(&self, running: Option<GameKey>, will_restart: bool) -> Vec<GameEntry> {
        self.games
            .iter()
            .enumerate()
            .map(|(index, game)| {
                let key = GameKey(index);
                let info = game.info();
                GameEntry {
                    key,
                    name: info.name.clone(),
                    description: info.description.clone(),
                    running: running == Some(key),
                    supported: self.policy.is_supported(info, self.engine_tags),
                    will_restart,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAGS: &[&str] = &["engine:arcade", "context:junkrat", "shape:text", "event:mouseup"];

    fn info(tags: &[&str], revision: &str) -> GameInfo {
        GameInfo::new("g", "", revision).with_feature_tags(tags.iter().copied())
    }

    #[test]
    fn strict_requires_every_tag_and_revision() {
        let p = CapabilityPolicy::Strict;
        assert!(p.is_supported(&info(&["shape:text"], "junkrat"), TAGS));
        assert!(p.is_supported(&info(&[], "junkrat"), TAGS));
        assert!(!p.is_supported(&info(&["shape:text", "event:click"], "junkrat"), TAGS));
        assert!(!p.is_supported(&info(&["shape:text"], "overwatch"), TAGS));
    }

    #[test]
    fn feature_tags_only_ignores_revision() {
        let p = CapabilityPolicy::FeatureTagsOnly;
        assert!(p.is_supported(&info(&["shape:text"], "overwatch"), TAGS));
        assert!(!p.is_supported(&info(&["event:keydown"], "junkrat"), TAGS));
    }

    #[test]
    fn keys_follow_registration_order() {
        assert_eq!(GameKey::new(3).index(), 3);
        assert_eq!(GameKey::new(3).to_string(), "#3");
        assert!(GameKey::new(0) < GameKey::new(1));
    }
}
