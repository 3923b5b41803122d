use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

use crate::model::types::Category;

/// JSON object kept in file order, so `Goal 10` stays after `Goal 2`.
#[derive(Clone, Debug, PartialEq)]
pub struct Ordered<V>(pub Vec<(String, V)>);

impl<V> Default for Ordered<V> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<V> Ordered<V> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.0.iter().map(|(_, v)| v)
    }
}

impl<'a, V> IntoIterator for &'a Ordered<V> {
    type Item = &'a (String, V);
    type IntoIter = std::slice::Iter<'a, (String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<V: Serialize> Serialize for Ordered<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct OrderedVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedVisitor<V> {
    type Value = Ordered<V>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a JSON object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, V>()? {
            entries.push((key, value));
        }
        Ok(Ordered(entries))
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Ordered<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OrderedVisitor(PhantomData))
    }
}

/// Goal hierarchy: big goals, the component goals behind them, and grouped sub-goals.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Goals {
    #[serde(default)]
    pub big_goals: Vec<String>,
    #[serde(default)]
    pub component_goals: Vec<String>,
    #[serde(default)]
    pub sub_goals: Ordered<Vec<String>>,
}

impl Goals {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.big_goals.is_empty() && self.component_goals.is_empty() && self.sub_goals.is_empty()
    }

    #[must_use]
    pub fn sub_goal_count(&self) -> usize {
        self.sub_goals.values().map(Vec::len).sum()
    }
}

/// A drill and the criteria for each progression level.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Drill {
    pub name: String,
    #[serde(default)]
    pub levels: Ordered<String>,
    #[serde(default)]
    pub description: Option<String>,
}

pub const BALL_STRIKING_DRILL_NAMES: &[&str] = &[
    "Towel drill",
    "Closed Eye",
    "Heel, Toe, Center",
    "3 Club Spray",
    "Wedge Ladder",
    "1 Hand Pitch",
];

pub const PUTTING_DRILL_NAMES: &[&str] = &["3-foot Putt", "Guess slope"];

impl Drill {
    /// Which practice tab the drill is described under, if any.
    #[must_use]
    pub fn category(&self) -> Option<Category> {
        let name = self.name.as_str();
        if BALL_STRIKING_DRILL_NAMES.contains(&name) {
            Some(Category::BallStriking)
        } else if PUTTING_DRILL_NAMES.contains(&name) {
            Some(Category::Putting)
        } else {
            None
        }
    }
}
