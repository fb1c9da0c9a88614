use crate::models::Table;
use crate::readers::Session;

/// First rows of each dataset, shown side by side in the original dashboard
/// and stacked here.
pub struct ExploreView<'a> {
    previews: Vec<(&'a str, &'a Table)>,
    rows: usize,
}

impl<'a> ExploreView<'a> {
    pub fn build(session: &'a Session) -> Self {
        let settings = &session.settings;
        Self {
            previews: vec![
                (settings.stations_file.as_str(), &session.stations),
                (settings.rentals_file.as_str(), &session.rentals),
                (settings.weather_file.as_str(), &session.weather),
            ],
            rows: settings.preview_rows,
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::from("=== Data exploration ===\n");
        for (title, table) in &self.previews {
            out.push_str(&format!(
                "\n--- {} ({} rows x {} columns) ---\n",
                title,
                table.len(),
                table.column_count()
            ));
            out.push_str(&table.head(self.rows).render());
        }
        out
    }
}
