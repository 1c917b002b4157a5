//! Chart descriptions for the launch records dashboard.
//!
//! The two dashboard handlers live here. Each is a pure function of the
//! current control values and the loaded [`Database`](lrd_db::Database):
//! the same inputs always produce an equal chart description, which the UI
//! hands to D3.js as JSON.

/// Qualitative colour palette shared by both charts.
pub mod palette {
    /// Ten-colour qualitative palette, cycled when there are more series.
    pub const QUALITATIVE: [&str; 10] = [
        "#636EFA", "#EF553B", "#00CC96", "#AB63FA", "#FFA15A", "#19D3F3", "#FF6692", "#B6E880",
        "#FF97FF", "#FECB52",
    ];

    /// Colour for the `index`-th series.
    pub fn color_for(index: usize) -> &'static str {
        QUALITATIVE[index % QUALITATIVE.len()]
    }

}

/// Launch success pie chart, driven by the site dropdown.
pub mod pie {
    use crate::palette;
    use lrd_core::launch_site::SiteSelection;
    use lrd_core::outcome::Outcome;
    use lrd_db::Database;
    use serde::Serialize;

    /// One pie slice.
    #[derive(Debug, Clone, Serialize, PartialEq)]
    pub struct PieSlice {
        pub label: String,
        pub value: i64,
        pub color: String,
    }

    /// Everything D3 needs to draw the success pie chart.
    #[derive(Debug, Clone, Serialize, PartialEq)]
    pub struct PieChart {
        pub title: String,
        pub slices: Vec<PieSlice>,
    }

    impl PieChart {
        pub fn total(&self) -> i64 {
            self.slices.iter().map(|s| s.value).sum()
        }

        pub fn is_empty(&self) -> bool {
            self.slices.is_empty()
        }
    }

    pub fn title_for(selection: &SiteSelection) -> String {
        match selection {
            SiteSelection::All => "Launch Success Rate for All Sites".to_string(),
            SiteSelection::Site(site) => format!("Success Rate for {} Site", site),
        }
    }

    /// Build the pie chart for the current dropdown selection.
    ///
    /// - `All`: one slice per launch site valued by its successful launches.
    /// - `Site(s)`: one slice per outcome class at `s` valued by launch count.
    ///   A site with no launches gives a chart with no slices.
    pub fn pie_chart(db: &Database, selection: &SiteSelection) -> anyhow::Result<PieChart> {
        let slices: Vec<PieSlice> = match selection {
            SiteSelection::All => db
                .query_success_by_site()?
                .into_iter()
                .enumerate()
                .map(|(i, s)| PieSlice {
                    label: s.launch_site,
                    value: s.successes,
                    color: palette::color_for(i).to_string(),
                })
                .collect(),
            SiteSelection::Site(site) => db
                .query_outcome_counts(site)?
                .into_iter()
                .enumerate()
                .map(|(i, c)| PieSlice {
                    label: Outcome::from_class(c.class)
                        .map(|o| o.label().to_string())
                        .unwrap_or_else(|| c.class.to_string()),
                    value: c.count,
                    color: palette::color_for(i).to_string(),
                })
                .collect(),
        };

        if slices.is_empty() {
            log::warn!("pie chart for {} has no slices", selection);
        }

        Ok(PieChart {
            title: title_for(selection),
            slices,
        })
    }
}

/// Payload mass vs. outcome scatter chart, driven by the dropdown and slider.
pub mod scatter {
    use crate::palette;
    use lrd_core::launch_site::SiteSelection;
    use lrd_core::payload_range::PayloadRange;
    use lrd_db::Database;
    use serde::Serialize;

    pub const X_LABEL: &str = "Payload Mass (kg)";
    pub const Y_LABEL: &str = "class";

    /// One plotted launch.
    #[derive(Debug, Clone, Serialize, PartialEq)]
    pub struct ScatterPoint {
        /// Payload mass in kilograms
        pub x: f64,
        /// Outcome class
        pub y: i64,
        /// Booster version category, used for colour
        pub category: String,
        pub launch_site: String,
        pub flight_number: Option<i64>,
    }

    /// Legend entry: a booster version category and its colour.
    #[derive(Debug, Clone, Serialize, PartialEq)]
    pub struct CategoryColor {
        pub category: String,
        pub color: String,
    }

    /// Everything D3 needs to draw the payload scatter chart.
    #[derive(Debug, Clone, Serialize, PartialEq)]
    pub struct ScatterChart {
        pub title: String,
        pub x_label: String,
        pub y_label: String,
        pub points: Vec<ScatterPoint>,
        /// Categories in first-appearance order among `points`
        pub categories: Vec<CategoryColor>,
    }

    impl ScatterChart {
        pub fn color_of(&self, category: &str) -> Option<&str> {
            self.categories
                .iter()
                .find(|c| c.category == category)
                .map(|c| c.color.as_str())
        }
    }

    pub fn title_for(selection: &SiteSelection) -> String {
        match selection {
            SiteSelection::All => "Success Count by Payload Mass (kg) for All Sites".to_string(),
            SiteSelection::Site(site) => {
                format!("Success Count by Payload Mass (kg) for {} Site", site)
            }
        }
    }

    /// Build the scatter chart for the current dropdown selection and payload range.
    ///
    /// Includes exactly the launches with payload mass in `range` (inclusive),
    /// further restricted to the selected site unless it is `All`.
    pub fn scatter_chart(
        db: &Database,
        selection: &SiteSelection,
        range: PayloadRange,
    ) -> anyhow::Result<ScatterChart> {
        let rows = db.query_payload_outcomes(selection.site(), range)?;

        let mut categories: Vec<CategoryColor> = Vec::new();
        let points: Vec<ScatterPoint> = rows
            .into_iter()
            .map(|r| {
                if !categories.iter().any(|c| c.category == r.booster_version_category) {
                    categories.push(CategoryColor {
                        category: r.booster_version_category.clone(),
                        color: palette::color_for(categories.len()).to_string(),
                    });
                }
                ScatterPoint {
                    x: r.payload_mass_kg,
                    y: r.class,
                    category: r.booster_version_category,
                    launch_site: r.launch_site,
                    flight_number: r.flight_number,
                }
            })
            .collect();

        Ok(ScatterChart {
            title: title_for(selection),
            x_label: X_LABEL.to_string(),
            y_label: Y_LABEL.to_string(),
            points,
            categories,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::pie::pie_chart;
    use super::scatter::scatter_chart;
    use lrd_core::launch_site::SiteSelection;
    use lrd_core::payload_range::PayloadRange;
    use lrd_db::Database;

    fn sample_db() -> Database {
        let csv = "\
,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,2,CCAFS LC-40,0,525.0,F9 v1.0  B0004,v1.0
2,3,VAFB SLC-4E,0,500.0,F9 v1.1  B1003,v1.1
3,4,CCAFS LC-40,1,3170.0,F9 v1.1,v1.1
4,5,KSC LC-39A,1,2490.0,F9 FT B1031.1,FT
5,6,KSC LC-39A,1,5300.0,F9 FT B1032.1,FT
6,7,KSC LC-39A,0,6070.0,F9 FT B1034,FT
7,8,CCAFS SLC-40,1,9600.0,F9 B5 B1046.2,B5
";
        Database::from_csv(csv).unwrap()
    }

    fn site(name: &str) -> SiteSelection {
        SiteSelection::Site(name.to_string())
    }

    fn range(low: f64, high: f64) -> PayloadRange {
        PayloadRange::new(low, high).unwrap()
    }

    #[test]
    fn pie_all_has_one_slice_per_site() {
        let db = sample_db();
        let chart = pie_chart(&db, &SiteSelection::All).unwrap();
        assert_eq!(chart.title, "Launch Success Rate for All Sites");
        assert_eq!(chart.slices.len(), db.query_sites().unwrap().len());
        let labels: Vec<&str> = chart.slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"]
        );
        let values: Vec<i64> = chart.slices.iter().map(|s| s.value).collect();
        assert_eq!(values, vec![1, 0, 2, 1]);
        assert_eq!(chart.total(), 4);
    }

    #[test]
    fn pie_site_values_sum_to_site_rows() {
        let db = sample_db();
        let chart = pie_chart(&db, &site("CCAFS LC-40")).unwrap();
        assert_eq!(chart.title, "Success Rate for CCAFS LC-40 Site");
        assert_eq!(chart.slices.len(), 2);
        assert_eq!(chart.slices[0].label, "Failure");
        assert_eq!(chart.slices[0].value, 2);
        assert_eq!(chart.slices[1].label, "Success");
        assert_eq!(chart.slices[1].value, 1);
        assert_eq!(chart.total(), 3);
    }

    #[test]
    fn pie_unknown_site_is_empty() {
        let db = sample_db();
        let chart = pie_chart(&db, &site("Boca Chica")).unwrap();
        assert!(chart.is_empty());
        assert_eq!(chart.title, "Success Rate for Boca Chica Site");
    }

    #[test]
    fn scatter_all_sites_filters_by_payload() {
        let db = sample_db();
        let chart = scatter_chart(&db, &SiteSelection::All, range(500.0, 5300.0)).unwrap();
        assert_eq!(
            chart.title,
            "Success Count by Payload Mass (kg) for All Sites"
        );
        assert_eq!(chart.points.len(), 5);
        assert!(chart.points.iter().all(|p| p.x >= 500.0 && p.x <= 5300.0));
        let categories: Vec<&str> = chart
            .categories
            .iter()
            .map(|c| c.category.as_str())
            .collect();
        assert_eq!(categories, vec!["v1.0", "v1.1", "FT"]);
        assert_eq!(chart.color_of("FT"), Some("#00CC96"));
        assert_eq!(chart.color_of("B5"), None);
    }

    #[test]
    fn scatter_site_restricts_rows() {
        let db = sample_db();
        let chart = scatter_chart(&db, &site("KSC LC-39A"), range(0.0, 10000.0)).unwrap();
        assert_eq!(
            chart.title,
            "Success Count by Payload Mass (kg) for KSC LC-39A Site"
        );
        assert_eq!(chart.points.len(), 3);
        assert!(chart.points.iter().all(|p| p.launch_site == "KSC LC-39A"));
        assert_eq!(chart.x_label, "Payload Mass (kg)");
        assert_eq!(chart.y_label, "class");
    }

    #[test]
    fn scatter_matches_worked_example() {
        let csv = "\
Launch Site,class,Payload Mass (kg),Booster Version Category
A,1,500,FT
A,0,1500,FT
B,1,800,B4
";
        let db = Database::from_csv(csv).unwrap();
        let chart = scatter_chart(&db, &site("A"), range(0.0, 1000.0)).unwrap();
        assert_eq!(chart.points.len(), 1);
        assert_eq!(chart.points[0].x, 500.0);
        assert_eq!(chart.points[0].y, 1);
        assert_eq!(chart.points[0].launch_site, "A");
    }

    #[test]
    fn scatter_degenerate_range() {
        let db = sample_db();
        let exact = scatter_chart(&db, &SiteSelection::All, range(3170.0, 3170.0)).unwrap();
        assert_eq!(exact.points.len(), 1);
        assert_eq!(exact.points[0].flight_number, Some(4));

        let empty = scatter_chart(&db, &SiteSelection::All, range(3171.0, 3171.0)).unwrap();
        assert!(empty.points.is_empty());
        assert!(empty.categories.is_empty());
    }

    #[test]
    fn handlers_are_idempotent() {
        let db = sample_db();
        let selection = site("CCAFS LC-40");
        assert_eq!(
            pie_chart(&db, &selection).unwrap(),
            pie_chart(&db, &selection).unwrap()
        );
        assert_eq!(
            scatter_chart(&db, &selection, range(0.0, 4000.0)).unwrap(),
            scatter_chart(&db, &selection, range(0.0, 4000.0)).unwrap()
        );
    }
}
