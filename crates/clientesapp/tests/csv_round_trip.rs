use clientesapp::model::CustomerRecord;
use clientesapp::store::csv_backend::CsvBackend;
use clientesapp::store::{CustomerStore, StoreStatus};
use std::fs;
use tempfile::TempDir;

fn record(name: &str, identifier: &str, complement: &str) -> CustomerRecord {
    CustomerRecord {
        name: name.to_string(),
        identifier: identifier.to_string(),
        email: "cliente@example.com".to_string(),
        address: "Av. Paulista, 1000".to_string(),
        number: "1000".to_string(),
        complement: complement.to_string(),
        phone: "(11) 98888-7777".to_string(),
    }
}

#[test]
fn save_then_load_preserves_keys_and_display_fields() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("clientes.csv");

    let originals = vec![
        record("Maria Oliveira", "529.982.247-25", ""),
        record("João \"Jota\" Batista", "12345678909", "Apto 12\nBloco B"),
        record("Ana Lúcia Conceição", "111.444.777-35", "Fundos, casa 2"),
    ];

    let (mut store, status) = CustomerStore::open(CsvBackend::new(&path)).unwrap();
    assert_eq!(status, StoreStatus::StartedEmpty);
    for r in &originals {
        store.register(r.clone()).unwrap();
    }
    store.save().unwrap();

    let (reloaded, status) = CustomerStore::open(CsvBackend::new(&path)).unwrap();
    assert_eq!(
        status,
        StoreStatus::Loaded {
            count: 3,
            duplicates: 0
        }
    );

    let keys: Vec<&str> = reloaded.keys().collect();
    assert_eq!(keys, ["11144477735", "12345678909", "52998224725"]);
    for r in &originals {
        assert_eq!(reloaded.get(&r.identifier), Some(r));
    }
}

#[test]
fn hand_written_file_is_normalized_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("clientes.csv");
    fs::write(
        &path,
        "Nome,CPF,Email,Endereço,Número,Complemento,Telefone\n\
         Maria Oliveira,529.982.247-25,maria@example.com,Rua A,10,,11999999999\n",
    )
    .unwrap();

    let (store, _) = CustomerStore::open(CsvBackend::new(&path)).unwrap();
    let maria = store.get("52998224725").unwrap();
    assert_eq!(maria.identifier, "529.982.247-25");
    assert_eq!(maria.complement, "");
}

#[test]
fn nonexistent_path_starts_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("clientes.csv");

    let (store, status) = CustomerStore::open(CsvBackend::new(&path)).unwrap();
    assert_eq!(status, StoreStatus::StartedEmpty);
    assert!(store.is_empty());
    assert!(!path.exists());
}
