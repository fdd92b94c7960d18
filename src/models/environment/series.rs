use std::fmt;

use crate::support::humidity::Observation;

use super::{Assessment, AssessmentError, ClimateControl};

/// Outcome for one keyed observation in a series.
#[derive(Debug)]
pub struct Row<K> {
    pub key: K,
    pub outcome: Result<Assessment, AssessmentError>,
}

impl<K> Row<K> {
    /// Returns the assessment if this row succeeded.
    #[must_use]
    pub fn assessment(&self) -> Option<&Assessment> {
        self.outcome.as_ref().ok()
    }
}

/// Assesses every observation in `rows`, keeping input order.
///
/// Keys are carried through untouched; a logger timestamp is typical. A row
/// that fails is reported in its [`Row::outcome`] and logged at `warn`
/// level, and the remaining rows are still assessed.
pub fn assess_series<K, I>(rows: I, control: &ClimateControl) -> Vec<Row<K>>
where
    I: IntoIterator<Item = (K, Observation)>,
    K: fmt::Debug,
{
    rows.into_iter()
        .map(|(key, observation)| {
            let outcome = control.assess(&observation);
            if let Err(err) = &outcome {
                log::warn!("assessment failed for row {key:?}: {err}");
            }
            Row { key, outcome }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::Timestamp;

    use crate::models::environment::Zone;

    fn at(minutes: i64) -> Timestamp {
        Timestamp::from_second(1_700_000_000 + minutes * 60).unwrap()
    }

    #[test]
    fn failing_rows_do_not_abort_the_batch() {
        let readings = vec![
            (at(0), Observation::new(20.0, 50.0).unwrap()),
            (at(15), Observation::new(10.0, 80.0).unwrap()),
            (at(30), Observation::new(20.0, 0.0).unwrap()),
            (at(45), Observation::new_unchecked(f64::NAN, 50.0)),
            (at(60), Observation::new(30.0, 90.0).unwrap()),
        ];

        let rows = assess_series(readings, &ClimateControl::default());

        assert_eq!(rows.len(), 5);
        assert_eq!(rows[2].key, at(30));

        let zones: Vec<Option<Zone>> = rows
            .iter()
            .map(|row| row.assessment().map(|a| a.zone))
            .collect();
        assert_eq!(
            zones,
            vec![
                Some(Zone::Within),
                Some(Zone::HeatingOnly),
                None,
                None,
                Some(Zone::CoolingAndDehumidify),
            ]
        );
    }

    #[test]
    fn empty_series() {
        let rows = assess_series(Vec::<(u32, Observation)>::new(), &ClimateControl::default());
        assert!(rows.is_empty());
    }
}
