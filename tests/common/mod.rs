use llist::List;

/// Builds a byte list holding each string in order
pub fn list_of(items: &[&str]) -> List {
    let mut list = List::new();
    for item in items {
        list.add(item.as_bytes()).unwrap();
    }
    list
}

/// Reads every element back out of the list through `get`
pub fn contents(list: &List) -> Vec<String> {
    (0..list.len())
        .map(|i| String::from_utf8(list.get(i).unwrap().to_vec()).unwrap())
        .collect()
}

/// Fixed-size record stored as raw bytes, for round-trip checks
#[derive(Default, Debug, PartialEq, Eq, Clone, Copy)]
pub struct Record {
    pub id: u32,
    pub value: u64,
}

impl Record {
    pub fn new(id: u32, value: u64) -> Self {
        Self { id, value }
    }

    pub fn to_bytes(self) -> [u8; 12] {
        let mut buf = [0u8; 12];
        buf[..4].copy_from_slice(&self.id.to_le_bytes());
        buf[4..].copy_from_slice(&self.value.to_le_bytes());
        buf
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut id = [0u8; 4];
        let mut value = [0u8; 8];
        id.copy_from_slice(&bytes[..4]);
        value.copy_from_slice(&bytes[4..12]);
        Self {
            id: u32::from_le_bytes(id),
            value: u64::from_le_bytes(value),
        }
    }
}
