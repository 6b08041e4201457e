use std::collections::BTreeMap;

use ahash::AHashSet;
use hexgrid::{GridCell, GridError, GridIndex};
use tracing::debug;

use crate::{aggregate::Observation, error::AggregationError};

/// Movement statistics for one ordered pair of consecutive cells.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionRow {
    pub predecessor: Option<GridCell>,
    pub cell: Option<GridCell>,
    pub observations: u64,           // Reports landing in `cell` after `predecessor`
    pub objects: u64,                // Distinct object ids
    pub median_speed: Option<f64>,
    pub median_course: Option<f64>,
    pub trips: u64,                  // Distinct trip ids
    pub median_lat: f64,
    pub median_lon: f64,
    pub grid_distance: Option<u32>,
}

/// Running totals for one (predecessor, cell) group.
#[derive(Default)]
struct Accumulator<'a> {
    count: u64,
    objects: AHashSet<&'a str>,
    trips: AHashSet<&'a str>,
    speeds: Vec<f64>,
    courses: Vec<f64>,
    lats: Vec<f64>,
    lons: Vec<f64>,
}

/// Aggregate observations into per-transition statistics at `resolution`.
///
/// Each object's reports are ordered by timestamp (ties keep input order) and
/// paired with the cell of the preceding report. Reports without a predecessor
/// cell, without a cell of their own, or without a course are ignored.
/// Rows are returned ordered by (predecessor, cell).
pub fn aggregate(mut observations: Vec<Observation>, grid: &dyn GridIndex, resolution: u8) -> Result<Vec<TransitionRow>, AggregationError> {
    observations.sort_by(|a, b| a.id.cmp(&b.id).then(a.timestamp.total_cmp(&b.timestamp)));

    let cells = observations.iter()
        .map(|obs| locate(obs, grid, resolution))
        .collect::<Result<Vec<_>, _>>()?;

    let mut groups = BTreeMap::<(GridCell, GridCell), Accumulator>::new();
    for (i, obs) in observations.iter().enumerate() {
        let predecessor = if i > 0 && observations[i - 1].id == obs.id { cells[i - 1] } else { None };
        let (Some(predecessor), Some(cell), Some(course)) = (predecessor, cells[i], obs.course) else { continue };
        let (Some(lat), Some(lon)) = (obs.lat, obs.lon) else { continue };

        let group = groups.entry((predecessor, cell)).or_default();
        group.count += 1;
        group.objects.insert(obs.id.as_str());
        if let Some(trip) = &obs.trip { group.trips.insert(trip.as_str()); }
        if let Some(speed) = obs.speed { group.speeds.push(speed); }
        group.courses.push(course);
        group.lats.push(lat);
        group.lons.push(lon);
    }

    let rows = groups.into_iter()
        .map(|((predecessor, cell), mut group)| Ok(TransitionRow {
            predecessor: Some(predecessor),
            cell: Some(cell),
            observations: group.count,
            objects: group.objects.len() as u64,
            median_speed: median(&mut group.speeds),
            median_course: median(&mut group.courses),
            trips: group.trips.len() as u64,
            median_lat: median(&mut group.lats).unwrap_or(f64::NAN),
            median_lon: median(&mut group.lons).unwrap_or(f64::NAN),
            grid_distance: grid.grid_distance(predecessor, cell)?,
        }))
        .collect::<Result<Vec<_>, AggregationError>>()?;

    debug!("[aggregate] {} observations -> {} transition rows", observations.len(), rows.len());
    Ok(rows)
}

/// Cell of an observation, or `None` when its position is missing or off the grid.
fn locate(obs: &Observation, grid: &dyn GridIndex, resolution: u8) -> Result<Option<GridCell>, GridError> {
    let (Some(lat), Some(lon)) = (obs.lat, obs.lon) else { return Ok(None) };
    match grid.cell_at(lat, lon, resolution) {
        Ok(cell) => Ok(Some(cell)),
        Err(GridError::InvalidCoordinate { .. }) => Ok(None),
        Err(err) => Err(err),
    }
}

/// Exact median; the mean of the two middle values for even lengths.
fn median(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() { return None }
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    Some(if values.len() % 2 == 0 { (values[mid - 1] + values[mid]) / 2.0 } else { values[mid] })
}
