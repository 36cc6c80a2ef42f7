//! Sparse day-keyed item storage.

use std::collections::BTreeMap;

use kalends_calendar::{CalendarDay, CalendarError};

/// What a [`SparseDayMap`] knows about one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayEntry<'a, T> {
    /// No entry: nothing has been loaded for this day yet.
    Unknown,
    /// The day was loaded and has no items.
    Empty,
    /// The day was loaded and has at least one item.
    Items(&'a [T]),
}

impl<T> DayEntry<'_, T> {
    /// Returns `true` unless the entry is [`DayEntry::Unknown`].
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

/// Items keyed by canonical `yyyy-MM-dd` day keys.
///
/// Absence of a key and an empty item list mean different things: the first
/// is "not loaded", the second is "loaded, nothing there".
#[derive(Debug, Clone, PartialEq)]
pub struct SparseDayMap<T> {
    days: BTreeMap<String, Vec<T>>,
}

impl<T> SparseDayMap<T> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self {
            days: BTreeMap::new(),
        }
    }

    /// Replaces the items of `day`. An empty vector marks the day as loaded
    /// and empty.
    pub fn insert(&mut self, day: CalendarDay, items: Vec<T>) -> Option<Vec<T>> {
        self.days.insert(day.key(), items)
    }

    /// Like [`insert`](Self::insert), keyed by a date string.
    ///
    /// The string goes through [`CalendarDay::parse`] so the stored key is
    /// always canonical.
    pub fn insert_key(&mut self, key: &str, items: Vec<T>) -> Result<CalendarDay, CalendarError> {
        let day = CalendarDay::parse(key)?;
        self.insert(day, items);
        Ok(day)
    }

    /// Appends one item to `day`, creating the entry if needed.
    pub fn push(&mut self, day: CalendarDay, item: T) {
        self.days.entry(day.key()).or_default().push(item);
    }

    /// Marks `day` as loaded with no items, keeping existing items.
    pub fn mark_empty(&mut self, day: CalendarDay) {
        self.days.entry(day.key()).or_default();
    }

    /// Forgets `day` entirely, making it unknown again.
    pub fn remove(&mut self, day: CalendarDay) -> Option<Vec<T>> {
        self.days.remove(&day.key())
    }

    /// Looks up `day`.
    pub fn get(&self, day: CalendarDay) -> DayEntry<'_, T> {
        match self.days.get(&day.key()) {
            None => DayEntry::Unknown,
            Some(items) if items.is_empty() => DayEntry::Empty,
            Some(items) => DayEntry::Items(items),
        }
    }

    /// Returns `true` if `day` has an entry, empty or not.
    pub fn contains(&self, day: CalendarDay) -> bool {
        self.days.contains_key(&day.key())
    }

    /// Number of known days.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Returns `true` if no day is known.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Iterates known days in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[T])> {
        self.days.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Total number of items across all days.
    pub fn item_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }
}

impl<T> Default for SparseDayMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<(CalendarDay, Vec<T>)> for SparseDayMap<T> {
    fn from_iter<I: IntoIterator<Item = (CalendarDay, Vec<T>)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (day, items) in iter {
            map.insert(day, items);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> CalendarDay {
        CalendarDay::new(y, m, d).unwrap()
    }

    #[test]
    fn unknown_empty_and_items_are_distinct() {
        let mut map = SparseDayMap::new();
        map.insert(day(2024, 6, 10), vec!["a"]);
        map.mark_empty(day(2024, 6, 12));

        assert_eq!(map.get(day(2024, 6, 10)), DayEntry::Items(&["a"][..]));
        assert_eq!(map.get(day(2024, 6, 11)), DayEntry::Unknown);
        assert_eq!(map.get(day(2024, 6, 12)), DayEntry::Empty);
        assert!(map.get(day(2024, 6, 12)).is_known());
        assert!(!map.get(day(2024, 6, 11)).is_known());
    }

    #[test]
    fn mark_empty_keeps_items() {
        let mut map = SparseDayMap::new();
        map.push(day(2024, 6, 10), 1);
        map.push(day(2024, 6, 10), 2);
        map.mark_empty(day(2024, 6, 10));
        assert_eq!(map.get(day(2024, 6, 10)), DayEntry::Items(&[1, 2][..]));
        assert_eq!(map.item_count(), 2);
    }

    #[test]
    fn insert_key_canonicalizes() {
        let mut map: SparseDayMap<u8> = SparseDayMap::new();
        let d = map.insert_key("2024-06-10T09:30:00", vec![]).unwrap();
        assert_eq!(d, day(2024, 6, 10));
        assert_eq!(map.iter().next().map(|(k, _)| k), Some("2024-06-10"));
        assert!(map.insert_key("June 10th", vec![]).is_err());
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn remove_makes_unknown() {
        let mut map: SparseDayMap<u8> = [(day(2024, 1, 1), vec![])].into_iter().collect();
        assert!(map.contains(day(2024, 1, 1)));
        map.remove(day(2024, 1, 1));
        assert_eq!(map.get(day(2024, 1, 1)), DayEntry::Unknown);
        assert!(map.is_empty());
    }

    #[test]
    fn iterates_chronologically() {
        let map: SparseDayMap<u8> = [
            (day(2024, 12, 1), vec![]),
            (day(2024, 2, 1), vec![]),
            (day(2023, 12, 31), vec![]),
        ]
        .into_iter()
        .collect();
        let keys: Vec<&str> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["2023-12-31", "2024-02-01", "2024-12-01"]);
    }
}
