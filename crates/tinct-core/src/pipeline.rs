//! Pipeline sequencer — folds a raster through an ordered filter list.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FilterError;
use crate::filters::FilterKind;
use crate::raster::Raster;

/// An ordered list of filters. Order matters and entries may repeat.
///
/// Serializes as a bare JSON array of filter names, e.g.
/// `["saturate", "darken", "high_contrast"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pipeline {
    filters: Vec<FilterKind>,
}

impl Pipeline {
    pub fn new(filters: Vec<FilterKind>) -> Self {
        Self { filters }
    }

    /// The stock demo chain: saturate, darken, then high contrast.
    pub fn playground() -> Self {
        Self::new(vec![
            FilterKind::Saturate,
            FilterKind::Darken,
            FilterKind::HighContrast,
        ])
    }

    /// Append a filter, builder style.
    pub fn then(mut self, kind: FilterKind) -> Self {
        self.filters.push(kind);
        self
    }

    /// Parse a JSON array of filter names.
    pub fn from_json(json: &str) -> Result<Self, FilterError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn filters(&self) -> &[FilterKind] {
        &self.filters
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Run every filter in order, feeding each output into the next filter.
    ///
    /// The first failing stage aborts the run; its error is wrapped in
    /// [`FilterError::Stage`] and no partial result is returned.
    pub fn process(&self, source: Raster) -> Result<Raster, FilterError> {
        process(source, &self.filters)
    }
}

/// Apply `filters` to `source` as a strict left-to-right fold.
///
/// An empty filter list returns `source` unchanged.
pub fn process(source: Raster, filters: &[FilterKind]) -> Result<Raster, FilterError> {
    tracing::debug!(
        "processing {}x{} raster through {} filter(s)",
        source.width(),
        source.height(),
        filters.len()
    );

    filters
        .iter()
        .enumerate()
        .try_fold(source, |raster, (index, &kind)| {
            tracing::debug!("stage {index}: {kind} (averages: {})", kind.needs_averages());
            kind.apply(raster).map_err(|e| {
                tracing::warn!("stage {index} ({kind}) failed: {e}");
                FilterError::Stage {
                    index,
                    kind,
                    source: Box::new(e),
                }
            })
        })
}

impl From<Vec<FilterKind>> for Pipeline {
    fn from(filters: Vec<FilterKind>) -> Self {
        Self::new(filters)
    }
}

impl FromIterator<FilterKind> for Pipeline {
    fn from_iter<I: IntoIterator<Item = FilterKind>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, kind) in self.filters.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{kind}")?;
        }
        Ok(())
    }
}

impl FromStr for Pipeline {
    type Err = FilterError;

    /// Parse a comma-separated list such as `"saturate, darken"`.
    ///
    /// The empty string is the empty pipeline. Any unknown name fails the
    /// whole parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Self::default());
        }
        s.split(',').map(str::parse::<FilterKind>).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Pixel;

    fn single(px: Pixel) -> Raster {
        Raster::from_pixels(1, 1, vec![px]).unwrap()
    }

    #[test]
    fn test_empty_pipeline_is_identity() {
        let raster = Raster::filled(3, 2, Pixel::new(12, 34, 56, 78)).unwrap();
        let out = Pipeline::default().process(raster.clone()).unwrap();
        assert_eq!(out, raster);
    }

    #[test]
    fn test_order_is_significant() {
        let px = Pixel::new(100, 100, 100, 255);
        let a = process(single(px), &[FilterKind::Darken, FilterKind::DoubleBrightness]).unwrap();
        let b = process(single(px), &[FilterKind::DoubleBrightness, FilterKind::Darken]).unwrap();
        assert_eq!(a[(0, 0)].red, 100);
        assert_eq!(b[(0, 0)].red, 150);
    }

    #[test]
    fn test_repeated_filters_apply_each_time() {
        let pipeline = Pipeline::default()
            .then(FilterKind::Darken)
            .then(FilterKind::Darken);
        let out = pipeline.process(single(Pixel::new(200, 120, 60, 9))).unwrap();
        assert_eq!(out[(0, 0)], Pixel::new(100, 20, 0, 9));
    }

    #[test]
    fn test_failing_stage_reports_index_and_kind() {
        let empty = Raster::from_pixels(0, 0, Vec::new()).unwrap();
        let err = process(empty, &[FilterKind::Darken, FilterKind::Saturate]).unwrap_err();
        match &err {
            FilterError::Stage { index, kind, .. } => {
                assert_eq!(*index, 1);
                assert_eq!(*kind, FilterKind::Saturate);
            }
            other => panic!("expected stage error, got {other:?}"),
        }
        assert!(matches!(err.root_cause(), FilterError::DivisionUndefined));
    }

    #[test]
    fn test_parse_comma_separated() {
        let pipeline: Pipeline = "saturate, darken,high_contrast".parse().unwrap();
        assert_eq!(pipeline, Pipeline::playground());
        assert!("".parse::<Pipeline>().unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_unknown_entry() {
        let err = "darken,blur".parse::<Pipeline>().unwrap_err();
        assert!(matches!(err, FilterError::UnknownFilter(name) if name == "blur"));
    }

    #[test]
    fn test_json_round_trip_shape() {
        let pipeline = Pipeline::playground();
        let json = serde_json::to_string(&pipeline).unwrap();
        assert_eq!(json, r#"["saturate","darken","high_contrast"]"#);
        assert_eq!(Pipeline::from_json(&json).unwrap(), pipeline);
    }

    #[test]
    fn test_from_json_rejects_unknown_filter() {
        let err = Pipeline::from_json(r#"["darken","sepia"]"#).unwrap_err();
        assert!(matches!(err, FilterError::Json(_)));
    }

    #[test]
    fn test_from_vec_and_iterator_agree() {
        let kinds = vec![FilterKind::Greyscale, FilterKind::Darken];
        let from_vec = Pipeline::from(kinds.clone());
        let collected: Pipeline = kinds.into_iter().collect();
        assert_eq!(from_vec, collected);
        assert_eq!(from_vec.len(), 2);
    }

    #[test]
    fn test_display_lists_stages() {
        assert_eq!(
            Pipeline::playground().to_string(),
            "Saturate -> Darken -> HighContrast"
        );
    }
}
