use serde::Deserialize;

// event
//  └── records[]
//       └── storage
//            ├── container
//            │    └── name
//            └── object
//                 └── key

/// Arrival notification posted by the object store: a batch of records,
/// each pointing at one newly stored object.
#[derive(Debug, Deserialize)]
pub struct NotificationEvent {
    pub records: Vec<NotificationRecord>,
}

#[derive(Debug, Deserialize)]
pub struct NotificationRecord {
    pub storage: StorageLocation,
}

#[derive(Debug, Deserialize)]
pub struct StorageLocation {
    pub container: ContainerRef,
    pub object: ObjectRef,
}

#[derive(Debug, Deserialize)]
pub struct ContainerRef {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ObjectRef {
    pub key: String,
}

impl NotificationRecord {
    pub fn container(&self) -> &str {
        &self.storage.container.name
    }

    pub fn key(&self) -> &str {
        &self.storage.object.key
    }
}
