use super::*;

#[test]
fn filtered_none_returns_everything_in_order() {
    let all = filtered(None);
    assert_eq!(all.len(), projects().len());
    let years: Vec<u16> = all.iter().map(|p| p.year).collect();
    let mut sorted = years.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(years, sorted, "projects are listed newest first");
}

#[test]
fn filtered_by_category_only_matches() {
    let web = filtered(Some(Category::Web));
    assert!(!web.is_empty());
    assert!(web.iter().all(|p| p.category == Category::Web));
}

#[test]
fn grouped_covers_every_project_exactly_once() {
    let groups = grouped();
    let total: usize = groups.iter().map(|(_, members)| members.len()).sum();
    assert_eq!(total, projects().len());
}

#[test]
fn grouped_follows_display_order_and_skips_empty() {
    let groups = grouped();
    let order: Vec<Category> = groups.iter().map(|(c, _)| *c).collect();
    let expected: Vec<Category> = Category::all()
        .iter()
        .copied()
        .filter(|c| projects().iter().any(|p| p.category == *c))
        .collect();
    assert_eq!(order, expected);
    assert!(groups.iter().all(|(_, members)| !members.is_empty()));
}

#[test]
fn slugs_are_unique() {
    let mut slugs: Vec<&str> = projects().iter().map(|p| p.slug).collect();
    let before = slugs.len();
    slugs.sort_unstable();
    slugs.dedup();
    assert_eq!(slugs.len(), before);
}
