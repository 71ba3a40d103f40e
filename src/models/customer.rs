#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub mobile_number: String,
    pub id_type: String,
    pub id_number: String,
}

/// Customer details as typed at the booking desk, before an id is issued.
#[derive(Debug, Clone)]
pub struct CustomerInput {
    pub name: String,
    pub mobile_number: String,
    pub id_type: String,
    pub id_number: String,
}

impl CustomerInput {
    pub fn into_customer(self, id: String) -> Customer {
        Customer {
            id,
            name: self.name,
            mobile_number: self.mobile_number,
            id_type: self.id_type,
            id_number: self.id_number,
        }
    }
}
