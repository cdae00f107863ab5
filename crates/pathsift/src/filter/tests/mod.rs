
use crate::test_fixtures::DummyData;

/// Ten numbered records with the given ids renamed to `name`.
fn named_list(name: &str, ids: &[i32]) -> Vec<DummyData> {
    DummyData::list(10)
        .into_iter()
        .map(|mut record| {
            if ids.contains(&record.id) {
                record.name = name.to_string();
            }
            record
        })
        .collect()
}
