use ordext_engine::VendorRegistry;

pub(crate) fn run(registry: &VendorRegistry) {
    for vendor in registry.vendors() {
        println!(
            "{} [{}] domains: {}",
            vendor.name(),
            vendor.strategy(),
            vendor.domains().join(", ")
        );
    }
}
