use super::domain::ZipcodeRecord;

pub const MAX_NEARBY_ZIPS: usize = 4;
pub const MAX_ZIP_DISTANCE: u32 = 10;

/// Approximates adjacency by numeric zip distance.
///
/// Candidates keep the universe's order and are cut at four without sorting
/// by distance. Non-numeric codes never match.
// TODO: replace numeric distance with county/centroid adjacency once the geography lookup carries coordinates.
pub fn nearby_zips<S: AsRef<str>>(subject: &str, universe: &[S]) -> Vec<String> {
    let Some(origin) = zip_number(subject) else {
        return Vec::new();
    };

    universe
        .iter()
        .map(AsRef::as_ref)
        .filter(|candidate| *candidate != subject)
        .filter(|candidate| {
            zip_number(candidate)
                .map(|value| value.abs_diff(origin) <= MAX_ZIP_DISTANCE)
                .unwrap_or(false)
        })
        .take(MAX_NEARBY_ZIPS)
        .map(str::to_string)
        .collect()
}

/// Fills `nearby_zips` for every record using the records themselves as the universe.
pub fn link_nearby(records: &mut [ZipcodeRecord]) {
    let universe: Vec<String> = records
        .iter()
        .map(|record| record.zipcode.clone())
        .collect();

    for record in records.iter_mut() {
        record.nearby_zips = nearby_zips(&record.zipcode, &universe);
    }
}

fn zip_number(zipcode: &str) -> Option<u32> {
    zipcode.trim().parse().ok()
}
