use std::fs::File;
use std::io::Error;
use std::path::Path;
use tempfile::NamedTempFile;
use vending::application::vending::VendingMachine;
use vending::domain::coin::Denominations;
use vending::domain::ports::CatalogStore;
use vending::domain::product::Product;
use vending::infrastructure::in_memory::InMemoryCatalogStore;

#[allow(dead_code)]
pub fn write_catalog(path: &Path, products: &[(&str, i64)]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["name", "price"])?;
    for (name, price) in products {
        let price = price.to_string();
        wtr.write_record([*name, price.as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}

#[allow(dead_code)]
pub fn catalog_file(products: &[(&str, i64)]) -> NamedTempFile {
    let file = NamedTempFile::new().unwrap();
    write_catalog(file.path(), products).unwrap();
    file
}

#[allow(dead_code)]
pub async fn machine_with(products: &[(&str, i64)]) -> VendingMachine {
    let store = InMemoryCatalogStore::new();
    for (name, price) in products {
        store.save(Product::new(*name, *price)).await.unwrap();
    }
    VendingMachine::new(Box::new(store), Denominations::default())
}
