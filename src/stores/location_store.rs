use std::rc::Rc;

use yew::Reducible;

use crate::models::{Coordinates, LocationRecord, PredictedLocation};

/// In-memory only; nothing here is persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationStore {
    pub current: Option<Coordinates>,
    pub history: Vec<LocationRecord>,
    pub predicted: Option<PredictedLocation>,
}

pub enum LocationAction {
    SetCurrent(Coordinates),
    SetHistory(Vec<LocationRecord>),
    SetPredicted(Option<PredictedLocation>),
    ClearPrediction,
}

impl LocationStore {
    pub fn set_current_location(&mut self, location: Coordinates) {
        self.current = Some(location);
    }

    pub fn set_history(&mut self, history: Vec<LocationRecord>) {
        self.history = history;
    }

    pub fn set_predicted_location(&mut self, predicted: Option<PredictedLocation>) {
        self.predicted = predicted;
    }

    pub fn clear_prediction(&mut self) {
        self.predicted = None;
    }

    /// Prediction first, then the current position
    pub fn search_location(&self) -> Option<Coordinates> {
        self.predicted
            .map(|p| p.coordinates())
            .or(self.current)
    }

    pub fn apply(&mut self, action: LocationAction) {
        match action {
            LocationAction::SetCurrent(location) => self.set_current_location(location),
            LocationAction::SetHistory(history) => self.set_history(history),
            LocationAction::SetPredicted(predicted) => self.set_predicted_location(predicted),
            LocationAction::ClearPrediction => self.clear_prediction(),
        }
    }
}

impl Reducible for LocationStore {
    type Action = LocationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_are_immediately_visible() {
        let mut store = LocationStore::default();
        store.set_current_location(Coordinates::new(51.5, -0.12));
        assert_eq!(store.current, Some(Coordinates::new(51.5, -0.12)));

        store.set_current_location(Coordinates::new(52.0, 0.0));
        assert_eq!(store.current, Some(Coordinates::new(52.0, 0.0)));
    }

    #[test]
    fn moving_does_not_invalidate_prediction() {
        let predicted = PredictedLocation {
            latitude: 1.0,
            longitude: 1.0,
            confidence: 0.9,
        };
        let store = Rc::new(LocationStore::default())
            .reduce(LocationAction::SetPredicted(Some(predicted)))
            .reduce(LocationAction::SetCurrent(Coordinates::new(5.0, 5.0)));
        assert_eq!(store.predicted, Some(predicted));
        assert_eq!(store.search_location(), Some(Coordinates::new(1.0, 1.0)));

        let cleared = store.reduce(LocationAction::ClearPrediction);
        assert_eq!(cleared.predicted, None);
        assert_eq!(cleared.search_location(), Some(Coordinates::new(5.0, 5.0)));
    }
}
