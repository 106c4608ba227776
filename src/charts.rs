use crate::day::Day;
use crate::ledger::WeeklySummary;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceBar {
    pub day: Day,
    pub distance_km: f64,
    pub cost_rs: f64,
    pub emissions_g: f64,
    pub destination: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostSlice {
    pub day: Day,
    pub cost_rs: f64,
    pub share_pct: f64,
    pub distance_km: f64,
    pub emissions_g: f64,
    pub destination: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct ChartData {
    pub distance_bars: Vec<DistanceBar>,
    pub cost_share: Vec<CostSlice>,
}

/// Series for the per-day distance bars and the cost-share pie.
pub fn build_charts(summary: &WeeklySummary) -> ChartData {
    let total = summary.total_cost_rs;

    let distance_bars = summary
        .breakdown
        .iter()
        .map(|row| DistanceBar {
            day: row.day,
            distance_km: row.distance_km,
            cost_rs: row.cost_rs,
            emissions_g: row.emissions_g,
            destination: row.destination.clone(),
        })
        .collect();

    let cost_share = summary
        .breakdown
        .iter()
        .map(|row| CostSlice {
            day: row.day,
            cost_rs: row.cost_rs,
            share_pct: if total > 0.0 {
                row.cost_rs / total * 100.0
            } else {
                0.0
            },
            distance_km: row.distance_km,
            emissions_g: row.emissions_g,
            destination: row.destination.clone(),
        })
        .collect();

    ChartData {
        distance_bars,
        cost_share,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::TravelLedger;

    #[test]
    fn charts_follow_breakdown_order() {
        let mut ledger = TravelLedger::new();
        ledger.record_entry(Day::Wednesday, true, "Market", 30.0).unwrap();
        ledger.record_entry(Day::Monday, true, "Office", 10.0).unwrap();

        let charts = build_charts(&ledger.summarize());
        let bar_days: Vec<Day> = charts.distance_bars.iter().map(|bar| bar.day).collect();
        assert_eq!(bar_days, vec![Day::Monday, Day::Wednesday]);
        assert_eq!(charts.distance_bars[1].distance_km, 30.0);

        assert_eq!(charts.cost_share[0].share_pct, 25.0);
        assert_eq!(charts.cost_share[1].share_pct, 75.0);
        assert_eq!(charts.cost_share[1].cost_rs, 2250.0);
    }

    #[test]
    fn chart_points_carry_hover_details() {
        let mut ledger = TravelLedger::new();
        ledger.record_entry(Day::Friday, true, "Gym", 4.0).unwrap();

        let charts = build_charts(&ledger.summarize());
        let bar = &charts.distance_bars[0];
        assert_eq!(bar.cost_rs, 300.0);
        assert_eq!(bar.emissions_g, 500.0);
        assert_eq!(bar.destination, "Gym");

        let slice = &charts.cost_share[0];
        assert_eq!(slice.share_pct, 100.0);
        assert_eq!(slice.distance_km, 4.0);
        assert_eq!(slice.emissions_g, 500.0);
        assert_eq!(slice.destination, "Gym");
    }

    #[test]
    fn empty_summary_has_empty_series() {
        let charts = build_charts(&WeeklySummary::default());
        assert_eq!(charts, ChartData::default());
    }
}
