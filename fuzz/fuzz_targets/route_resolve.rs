#![no_main]

use libfuzzer_sys::fuzz_target;
use rail_router::{normalize_path, RailflowPage, RouteTable};

fuzz_target!(|data: &[u8]| {
    let raw = String::from_utf8_lossy(data);
    let table = RouteTable::railflow();
    let resolved = table.resolve(&raw);

    assert!(resolved.path.starts_with('/'));
    assert_eq!(normalize_path(&resolved.path), resolved.path);
    assert_eq!(resolved.train_id().is_some(), resolved.page.takes_train_id());

    if resolved.page == RailflowPage::NotFound {
        assert!(table.path_for(resolved.page, &resolved.params).is_none());
        return;
    }
    let canonical = table
        .path_for(resolved.page, &resolved.params)
        .expect("matched route renders back to a path");
    let again = table.resolve(&canonical);
    assert_eq!(again.page, resolved.page);
    assert_eq!(again.params, resolved.params);
});
