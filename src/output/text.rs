use crate::describe::Description;

pub fn print_description(d: &Description, description_property: &str, commit_count_property: &str) {
    println!("{description_property} = {}", d.label);
    println!("{commit_count_property} = {}", d.commit_count);
}

pub fn print_properties(sink: &str, entries: &[(String, String)]) {
    if entries.is_empty() {
        println!("No properties in {sink}.");
        return;
    }
    println!("Properties in {sink}:");
    for (k, v) in entries {
        println!("  {k} = {v}");
    }
}

pub fn print_modules(store: &str, modules: &[(String, Vec<(String, String)>)]) {
    if modules.is_empty() {
        println!("No modules in {store}.");
        return;
    }
    for (module, entries) in modules {
        println!("[{module}]");
        for (k, v) in entries {
            println!("  {k} = {v}");
        }
    }
}
