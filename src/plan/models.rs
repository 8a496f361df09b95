//! Wedding-plan document model
//!
//! Rust structs for the whole plan document. The wire format is the
//! camelCase JSON the web planner reads and writes, so snapshots move
//! between the two without translation.

use serde::{Deserialize, Serialize};

/// The root document: every collection the planner manages.
///
/// The document is the sole unit of persistence; no entity inside it is
/// individually durable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeddingPlan {
    pub wedding: WeddingDetails,
    pub guests: Vec<Guest>,
    pub events: Vec<Event>,
    pub venues: Vec<Venue>,
    pub budget: Budget,
    pub vendors: Vec<Vendor>,
    pub tasks: Vec<Task>,
    pub shopping: Vec<ShoppingItem>,
    pub invitations: Vec<Invitation>,
    pub accommodation: Vec<AccommodationBlock>,
    pub menu: Vec<MenuEntry>,
    pub family: Vec<FamilyMember>,
    pub transport: Vec<TransportRecord>,
    pub staff: Vec<StaffMember>,
    pub gifts: Vec<Gift>,
    pub return_money: Vec<PaymentRecord>,
}

/// Singleton record describing the wedding itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeddingDetails {
    pub groom_name: String,
    pub bride_name: String,
    pub groom_family: String,
    pub bride_family: String,
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    pub overall_theme: String,
    pub locations: Vec<String>,
}

/// RSVP status of a guest, serialized lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rsvp {
    #[default]
    Pending,
    Confirmed,
    Declined,
}

/// An invited guest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub id: i64,
    pub name: String,
    pub group: String,
    pub rsvp: Rsvp,
    pub tag: String,
    /// Event *names* the guest attends. Weak references: renaming an
    /// event does not rewrite these.
    pub events: Vec<String>,
    pub dietary: String,
    pub accommodation: String,
    pub contact: String,
    pub notes: String,
}

/// A ceremony or function on the wedding timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub date: String,
    pub time: String,
    pub venue: String,
    pub theme: String,
    pub dress_code: String,
    pub budget: f64,
    pub staff: Vec<String>,
    pub checklist: Vec<String>,
    pub notes: String,
    pub groom_entry: Option<EntryPlan>,
    pub bride_entry: Option<EntryPlan>,
    pub songs: Vec<Song>,
}

/// Choreographed entrance (groom or bride) for an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryPlan {
    pub time: String,
    pub music: String,
    pub sequence: String,
    pub costume: String,
}

/// A performance song attached to an event. Ids are scoped to the event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: i64,
    pub title: String,
    pub artist: String,
    pub duration: String,
    pub performers: Vec<String>,
    pub order: u32,
    pub practiced: bool,
}

/// A candidate or booked venue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    /// Store-assigned id; `0` in older snapshots means unassigned.
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub location: String,
    pub contact: String,
    pub stage: bool,
    pub catering: bool,
}

/// Budget singleton: the overall figure, category allocations, and the
/// expense ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub total: f64,
    /// Absent in snapshots written right after a budget reset.
    #[serde(default)]
    pub categories: Vec<BudgetCategory>,
    pub expenses: Vec<Expense>,
}

/// A named budget allocation. `spent` is a manually maintained figure and
/// may diverge from the sum of matching expenses; nothing reconciles the
/// two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetCategory {
    pub name: String,
    pub allocated: f64,
    pub spent: f64,
}

/// One line in the expense ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: i64,
    pub item: String,
    /// Weak reference to a `BudgetCategory` name.
    pub category: String,
    pub amount: f64,
    /// "Advance Payment", "Final Payment", or "Additional Charges".
    #[serde(rename = "type")]
    pub payment_type: String,
    pub date: String,
    pub vendor: String,
    pub paid: bool,
}

/// A hired vendor and the running payment state against them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub vendor_type: String,
    pub contact: String,
    pub email: String,
    pub rate: f64,
    pub advance_paid: f64,
    pub final_paid: bool,
    /// 0-5 stars.
    pub rating: u8,
    pub notes: String,
}

/// A checklist task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub assignee: String,
    pub deadline: String,
    pub done: bool,
}

/// An item being price-compared across vendors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    #[serde(default)]
    pub id: i64,
    pub item: String,
    pub options: Vec<PriceOption>,
    pub shortlisted: bool,
    pub delivered: bool,
}

/// One vendor quote for a shopping item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceOption {
    pub vendor: String,
    pub price: f64,
}

/// An invitation run (print batch or e-invite template).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invitation {
    #[serde(default)]
    pub id: i64,
    /// "Print" or "E-Invite".
    #[serde(rename = "type")]
    pub kind: String,
    pub template: String,
    /// Guest names; weak references.
    pub guests_sent: Vec<String>,
    pub guests_responded: Vec<String>,
}

/// A block of rooms reserved at one hotel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccommodationBlock {
    #[serde(default)]
    pub id: i64,
    pub hotel: String,
    pub rooms: u32,
    /// Guest names assigned to this block; weak references.
    pub guests: Vec<String>,
}

/// Menu for one `(event, meal type)` pairing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntry {
    pub id: i64,
    /// Weak reference to an `Event` name.
    pub event: String,
    pub meal_type: String,
    pub items: Vec<MenuItem>,
    pub caterer: String,
    pub estimated_cost: f64,
}

/// A dish on a menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub name: String,
    /// "Vegetarian", "Vegan", "Non-Veg", or "Gluten-Free".
    #[serde(rename = "type")]
    pub diet: String,
    pub spice_level: String,
    pub quantity: u32,
    pub allergens: String,
}

/// A relative on the family tree board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMember {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub role: String,
    pub relation: String,
    pub photo: String,
    pub group: String,
}

/// A scheduled bus/train/flight moving one guest group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportRecord {
    pub id: i64,
    #[serde(rename = "type")]
    pub mode: String,
    pub details: String,
    pub group: String,
    pub date: String,
    pub time: String,
    pub pickup_location: String,
    pub drop_location: String,
    pub capacity: u32,
    pub booked: u32,
}

/// A hired staff member (coordinator, caterer crew, DJ, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub contact: String,
    /// Event names worked; weak references.
    pub events: Vec<String>,
    pub shift: String,
    pub payment: f64,
    pub paid: bool,
    pub notes: String,
}

/// Gift ledger entry, discriminated by the JSON `type` field.
///
/// Return gifts are things bought in bulk to hand out; the other three
/// kinds share the received-gift shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Gift {
    #[serde(rename = "Return Gift")]
    Return(ReturnGift),
    #[serde(rename = "Gift Received")]
    Received(ReceivedGift),
    #[serde(rename = "Cash Gift")]
    Cash(ReceivedGift),
    #[serde(rename = "Gold/Jewelry")]
    Jewelry(ReceivedGift),
}

impl Gift {
    pub fn id(&self) -> i64 {
        match self {
            Gift::Return(g) => g.id,
            Gift::Received(g) | Gift::Cash(g) | Gift::Jewelry(g) => g.id,
        }
    }

    pub fn item(&self) -> &str {
        match self {
            Gift::Return(g) => &g.item,
            Gift::Received(g) | Gift::Cash(g) | Gift::Jewelry(g) => &g.item,
        }
    }
}

/// A gift to hand out to guests, tracked from order to delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnGift {
    pub id: i64,
    pub item: String,
    pub quantity: u32,
    pub cost_per_unit: f64,
    pub total_cost: f64,
    pub ordered: bool,
    pub delivered: bool,
    pub notes: String,
}

/// A gift received from a guest (in kind, cash, or jewelry).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceivedGift {
    pub id: i64,
    pub from: String,
    pub item: String,
    pub value: f64,
    pub received_date: String,
    pub thank_you_sent: bool,
    pub notes: String,
}

/// Money owed back to a vendor or staff member after the functions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub id: i64,
    pub vendor: String,
    /// Weak reference to a `BudgetCategory` name.
    pub category: String,
    pub amount_given: f64,
    pub advance: f64,
    pub final_payment: f64,
    pub balance_due: f64,
    pub due_date: String,
    pub paid: bool,
    pub payment_date: Option<String>,
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_guest_wire_format() {
        let guest = Guest {
            id: 7,
            name: "Anand Gupta".to_string(),
            group: "Friend".to_string(),
            rsvp: Rsvp::Pending,
            tag: "Friend".to_string(),
            events: vec!["Sangeet".to_string()],
            dietary: "Non-Veg".to_string(),
            accommodation: String::new(),
            contact: "9999000003".to_string(),
            notes: String::new(),
        };

        let value = serde_json::to_value(&guest).unwrap();
        assert_eq!(value["rsvp"], json!("pending"));
        assert_eq!(value["events"], json!(["Sangeet"]));
    }

    #[test]
    fn test_event_wire_format_uses_camel_case() {
        let raw = json!({
            "id": 4,
            "name": "Wedding Ceremony",
            "date": "2025-11-30",
            "time": "11:00",
            "venue": "Main Venue",
            "theme": "Royal Gold",
            "dressCode": "Traditional Heavy",
            "budget": 800000.0,
            "staff": [],
            "checklist": ["Mandap setup"],
            "notes": "Main ceremony",
            "groomEntry": {
                "time": "10:45",
                "music": "Aaj Mere Yaar Ki Shaadi Hai",
                "sequence": "Horse entry with band",
                "costume": "Gold Sherwani"
            },
            "brideEntry": null,
            "songs": []
        });

        let event: Event = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(event.dress_code, "Traditional Heavy");
        assert_eq!(
            event.groom_entry.as_ref().unwrap().costume,
            "Gold Sherwani"
        );
        assert!(event.bride_entry.is_none());

        let back = serde_json::to_value(&event).unwrap();
        assert_eq!(back, raw);
    }

    #[test]
    fn test_gift_union_discriminates_on_type() {
        let raw = json!({
            "id": 2,
            "type": "Return Gift",
            "item": "Dry Fruit Box",
            "quantity": 150,
            "costPerUnit": 500.0,
            "totalCost": 75000.0,
            "ordered": true,
            "delivered": false,
            "notes": "Premium packaging"
        });

        let gift: Gift = serde_json::from_value(raw.clone()).unwrap();
        match &gift {
            Gift::Return(g) => {
                assert_eq!(g.quantity, 150);
                assert_eq!(g.total_cost, 75000.0);
            }
            other => panic!("expected a return gift, got {other:?}"),
        }
        assert_eq!(gift.id(), 2);
        assert_eq!(gift.item(), "Dry Fruit Box");

        let cash: Gift = serde_json::from_value(json!({
            "id": 3,
            "type": "Cash Gift",
            "from": "Priya Jain",
            "item": "Shagun envelope",
            "value": 11000.0,
            "receivedDate": "2025-11-30",
            "thankYouSent": false,
            "notes": ""
        }))
        .unwrap();
        assert!(matches!(cash, Gift::Cash(_)));

        let unknown = serde_json::from_value::<Gift>(json!({
            "id": 4,
            "type": "Mystery",
            "item": "?"
        }));
        assert!(unknown.is_err());
    }

    #[test]
    fn test_reserved_word_fields_round_trip_as_type() {
        let expense = Expense {
            id: 1,
            item: "Venue Booking".to_string(),
            category: "Venue".to_string(),
            amount: 600000.0,
            payment_type: "Final Payment".to_string(),
            date: "2025-10-15".to_string(),
            vendor: "The Lalit Delhi".to_string(),
            paid: true,
        };
        let value = serde_json::to_value(&expense).unwrap();
        assert_eq!(value["type"], json!("Final Payment"));
        assert!(value.get("paymentType").is_none());

        let transport: TransportRecord = serde_json::from_value(json!({
            "id": 1,
            "type": "Bus",
            "details": "Delhi to Hanumangarh",
            "group": "Groom's Side",
            "date": "2025-11-27",
            "time": "08:00",
            "pickupLocation": "Delhi Central",
            "dropLocation": "Hanumangarh",
            "capacity": 50,
            "booked": 35
        }))
        .unwrap();
        assert_eq!(transport.mode, "Bus");
        assert_eq!(transport.pickup_location, "Delhi Central");
    }

    #[test]
    fn test_positional_records_default_missing_ids_to_zero() {
        // Snapshots from the web planner carry no ids on these records.
        let task: Task = serde_json::from_value(json!({
            "name": "Book venue",
            "assignee": "Raj Agarwal",
            "deadline": "05-Nov-2025",
            "done": false
        }))
        .unwrap();
        assert_eq!(task.id, 0);

        let block: AccommodationBlock = serde_json::from_value(json!({
            "hotel": "The Lalit Delhi",
            "rooms": 25,
            "guests": ["Raj Agarwal"]
        }))
        .unwrap();
        assert_eq!(block.id, 0);
    }

    #[test]
    fn test_budget_tolerates_missing_categories() {
        // The web planner's reset wrote budgets without a categories field.
        let budget: Budget = serde_json::from_value(json!({
            "total": 0.0,
            "expenses": []
        }))
        .unwrap();
        assert!(budget.categories.is_empty());
    }
}
