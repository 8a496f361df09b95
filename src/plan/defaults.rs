//! Bundled starter document
//!
//! The plan a fresh install (or a reset) starts from. Field values match
//! the sample plan shipped with the web planner, so both frontends show
//! the same starting point.

use super::models::*;

/// Build a fresh copy of the starter plan.
pub fn starter_plan() -> WeddingPlan {
    WeddingPlan {
        wedding: starter_wedding(),
        guests: starter_guests(),
        events: starter_events(),
        venues: starter_venues(),
        budget: starter_budget(),
        vendors: starter_vendors(),
        tasks: starter_tasks(),
        shopping: starter_shopping(),
        invitations: starter_invitations(),
        accommodation: starter_accommodation(),
        menu: starter_menu(),
        family: starter_family(),
        transport: starter_transport(),
        staff: starter_staff(),
        gifts: starter_gifts(),
        return_money: starter_return_money(),
    }
}

fn starter_wedding() -> WeddingDetails {
    WeddingDetails {
        groom_name: "Groom Agarwal".into(),
        bride_name: "Bride Agarwal".into(),
        groom_family: "Agarwal".into(),
        bride_family: "Agarwal".into(),
        date: "2025-11-30".into(),
        overall_theme: "Traditional Gold".into(),
        locations: vec!["Delhi".into(), "Hanumangarh".into()],
    }
}

fn starter_guests() -> Vec<Guest> {
    vec![
        Guest {
            id: 1,
            name: "Raj Agarwal".into(),
            group: "groom's family".into(),
            rsvp: Rsvp::Confirmed,
            tag: "Family".into(),
            events: vec![
                "Mehendi".into(),
                "Sangeet".into(),
                "Wedding Ceremony".into(),
                "Reception".into(),
            ],
            dietary: "Vegetarian".into(),
            accommodation: "The Lalit Delhi".into(),
            contact: "9999000001".into(),
            notes: "VIP guest".into(),
        },
        Guest {
            id: 2,
            name: "Sunita Agarwal".into(),
            group: "bride's family".into(),
            rsvp: Rsvp::Confirmed,
            tag: "Family".into(),
            events: vec![
                "Mehendi".into(),
                "Sangeet".into(),
                "Haldi".into(),
                "Wedding Ceremony".into(),
                "Reception".into(),
            ],
            dietary: "Vegetarian".into(),
            accommodation: "The Lalit Delhi".into(),
            contact: "9999000002".into(),
            notes: String::new(),
        },
        Guest {
            id: 3,
            name: "Anand Gupta".into(),
            group: "Friend".into(),
            rsvp: Rsvp::Pending,
            tag: "Friend".into(),
            events: vec!["Sangeet".into(), "Reception".into()],
            dietary: "Non-Veg".into(),
            accommodation: String::new(),
            contact: "9999000003".into(),
            notes: String::new(),
        },
        Guest {
            id: 4,
            name: "Priya Jain".into(),
            group: "Friend".into(),
            rsvp: Rsvp::Confirmed,
            tag: "Friend".into(),
            events: vec!["Sangeet".into(), "Reception".into()],
            dietary: "Vegan".into(),
            accommodation: "Hotel Radisson Hanumangarh".into(),
            contact: "9999000004".into(),
            notes: String::new(),
        },
    ]
}

fn starter_events() -> Vec<Event> {
    vec![
        Event {
            id: 1,
            name: "Mehendi".into(),
            date: "2025-11-27".into(),
            time: "16:00".into(),
            venue: "Community Hall".into(),
            theme: "Bright Mehendi".into(),
            dress_code: "Traditional Colorful".into(),
            budget: 150_000.0,
            staff: vec![],
            checklist: vec![
                "Setup mehndi stations".into(),
                "Arrange seating".into(),
                "Music setup".into(),
            ],
            notes: "Bride side event".into(),
            groom_entry: None,
            bride_entry: None,
            songs: vec![],
        },
        Event {
            id: 2,
            name: "Sangeet".into(),
            date: "2025-11-28".into(),
            time: "18:00".into(),
            venue: "Hotel Ballroom".into(),
            theme: "Musical Night".into(),
            dress_code: "Indo-Western Glam".into(),
            budget: 250_000.0,
            staff: vec![],
            checklist: vec![
                "Sound check".into(),
                "Stage setup".into(),
                "Lighting".into(),
            ],
            notes: "Both families".into(),
            groom_entry: None,
            bride_entry: None,
            songs: vec![Song {
                id: 1,
                title: "Gal Ban Gayi".into(),
                artist: "Neha Kakkar".into(),
                duration: "3:30".into(),
                performers: vec!["Priya Jain".into()],
                order: 1,
                practiced: false,
            }],
        },
        Event {
            id: 3,
            name: "Haldi".into(),
            date: "2025-11-29".into(),
            time: "10:00".into(),
            venue: "Home".into(),
            theme: "Yellow Turmeric".into(),
            dress_code: "Yellow Traditional".into(),
            budget: 80_000.0,
            staff: vec![],
            checklist: vec![
                "Prepare haldi paste".into(),
                "Setup decoration".into(),
            ],
            notes: "Morning event".into(),
            groom_entry: None,
            bride_entry: None,
            songs: vec![],
        },
        Event {
            id: 4,
            name: "Wedding Ceremony".into(),
            date: "2025-11-30".into(),
            time: "11:00".into(),
            venue: "Main Venue".into(),
            theme: "Royal Gold".into(),
            dress_code: "Traditional Heavy".into(),
            budget: 800_000.0,
            staff: vec![],
            checklist: vec![
                "Mandap setup".into(),
                "Priest arrival".into(),
                "Photography".into(),
            ],
            notes: "Main ceremony".into(),
            groom_entry: Some(EntryPlan {
                time: "10:45".into(),
                music: "Aaj Mere Yaar Ki Shaadi Hai".into(),
                sequence: "Horse entry with band".into(),
                costume: "Gold Sherwani".into(),
            }),
            bride_entry: Some(EntryPlan {
                time: "12:30".into(),
                music: "Piya Aaye Na".into(),
                sequence: "Under phoolon ki chadar".into(),
                costume: "Red Lehenga".into(),
            }),
            songs: vec![],
        },
        Event {
            id: 5,
            name: "Reception".into(),
            date: "2025-11-30".into(),
            time: "18:00".into(),
            venue: "Banquet Hall".into(),
            theme: "Elegant Evening".into(),
            dress_code: "Western Formal".into(),
            budget: 400_000.0,
            staff: vec![],
            checklist: vec![
                "Red carpet setup".into(),
                "Photo booth".into(),
                "Cake arrangement".into(),
            ],
            notes: "Evening party".into(),
            groom_entry: None,
            bride_entry: None,
            songs: vec![],
        },
    ]
}

fn starter_venues() -> Vec<Venue> {
    vec![
        Venue {
            id: 1,
            name: "The Lalit Delhi".into(),
            location: "Delhi".into(),
            contact: "9999123456".into(),
            stage: true,
            catering: true,
        },
        Venue {
            id: 2,
            name: "Hotel Radisson Hanumangarh".into(),
            location: "Hanumangarh".into(),
            contact: "9999876543".into(),
            stage: true,
            catering: true,
        },
    ]
}

fn starter_budget() -> Budget {
    let categories = [
        ("Venue", 600_000.0, 600_000.0),
        ("Catering", 400_000.0, 350_000.0),
        ("Decoration", 200_000.0, 180_000.0),
        ("Photography", 150_000.0, 120_000.0),
        ("Entertainment", 100_000.0, 80_000.0),
        ("Staff", 150_000.0, 100_000.0),
        ("Transportation", 100_000.0, 50_000.0),
        ("Gifts", 150_000.0, 100_000.0),
        ("Miscellaneous", 150_000.0, 50_000.0),
    ]
    .into_iter()
    .map(|(name, allocated, spent)| BudgetCategory {
        name: name.into(),
        allocated,
        spent,
    })
    .collect();

    Budget {
        total: 2_000_000.0,
        categories,
        expenses: vec![
            Expense {
                id: 1,
                item: "Venue Booking".into(),
                category: "Venue".into(),
                amount: 600_000.0,
                payment_type: "Final Payment".into(),
                date: "2025-10-15".into(),
                vendor: "The Lalit Delhi".into(),
                paid: true,
            },
            Expense {
                id: 2,
                item: "Photography".into(),
                category: "Photography".into(),
                amount: 120_000.0,
                payment_type: "Advance Payment".into(),
                date: "2025-10-20".into(),
                vendor: "Photographer".into(),
                paid: true,
            },
            Expense {
                id: 3,
                item: "Decorations".into(),
                category: "Decoration".into(),
                amount: 180_000.0,
                payment_type: "Advance Payment".into(),
                date: "2025-10-25".into(),
                vendor: "Decorator".into(),
                paid: false,
            },
        ],
    }
}

fn starter_vendors() -> Vec<Vendor> {
    vec![
        Vendor {
            id: 1,
            name: "Decorator".into(),
            vendor_type: "Decorator".into(),
            contact: "9999000001".into(),
            email: "decorator@example.com".into(),
            rate: 180_000.0,
            advance_paid: 50_000.0,
            final_paid: false,
            rating: 0,
            notes: "Specializes in floral".into(),
        },
        Vendor {
            id: 2,
            name: "Caterer".into(),
            vendor_type: "Caterer".into(),
            contact: "9999000002".into(),
            email: "caterer@example.com".into(),
            rate: 350_000.0,
            advance_paid: 100_000.0,
            final_paid: true,
            rating: 5,
            notes: "Excellent food quality".into(),
        },
        Vendor {
            id: 3,
            name: "Photographer".into(),
            vendor_type: "Photographer".into(),
            contact: "9999000003".into(),
            email: "photo@example.com".into(),
            rate: 120_000.0,
            advance_paid: 40_000.0,
            final_paid: false,
            rating: 4,
            notes: "Cinematic style".into(),
        },
        Vendor {
            id: 4,
            name: "DJ".into(),
            vendor_type: "DJ".into(),
            contact: "9999000004".into(),
            email: "dj@example.com".into(),
            rate: 80_000.0,
            advance_paid: 20_000.0,
            final_paid: false,
            rating: 0,
            notes: String::new(),
        },
    ]
}

fn starter_tasks() -> Vec<Task> {
    [
        ("Book venue", "Raj Agarwal", "05-Nov-2025"),
        ("Send invitations", "Priya Jain", "10-Nov-2025"),
        ("Assign accommodation", "Anand Gupta", "15-Nov-2025"),
        ("Book photographer", "Sunita Agarwal", "08-Nov-2025"),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, assignee, deadline), id)| Task {
        id,
        name: name.into(),
        assignee: assignee.into(),
        deadline: deadline.into(),
        done: false,
    })
    .collect()
}

fn starter_shopping() -> Vec<ShoppingItem> {
    vec![
        ShoppingItem {
            id: 1,
            item: "Lehenga".into(),
            options: vec![
                PriceOption {
                    vendor: "Jeweler".into(),
                    price: 90_000.0,
                },
                PriceOption {
                    vendor: "Caterer".into(),
                    price: 85_000.0,
                },
            ],
            shortlisted: false,
            delivered: false,
        },
        ShoppingItem {
            id: 2,
            item: "Sherwani".into(),
            options: vec![
                PriceOption {
                    vendor: "Jeweler".into(),
                    price: 55_000.0,
                },
                PriceOption {
                    vendor: "Decorator".into(),
                    price: 50_000.0,
                },
            ],
            shortlisted: false,
            delivered: false,
        },
    ]
}

fn starter_invitations() -> Vec<Invitation> {
    vec![
        Invitation {
            id: 1,
            kind: "Print".into(),
            template: "Classic Red".into(),
            guests_sent: vec![],
            guests_responded: vec![],
        },
        Invitation {
            id: 2,
            kind: "E-Invite".into(),
            template: "Floral".into(),
            guests_sent: vec![],
            guests_responded: vec![],
        },
    ]
}

fn starter_accommodation() -> Vec<AccommodationBlock> {
    vec![
        AccommodationBlock {
            id: 1,
            hotel: "The Lalit Delhi".into(),
            rooms: 25,
            guests: vec!["Raj Agarwal".into(), "Priya Jain".into()],
        },
        AccommodationBlock {
            id: 2,
            hotel: "Hotel Radisson Hanumangarh".into(),
            rooms: 15,
            guests: vec!["Sunita Agarwal".into(), "Anand Gupta".into()],
        },
    ]
}

fn starter_menu() -> Vec<MenuEntry> {
    vec![
        MenuEntry {
            id: 1,
            event: "Mehendi".into(),
            meal_type: "Dinner".into(),
            items: vec![
                MenuItem {
                    name: "Paneer Tikka".into(),
                    diet: "Vegetarian".into(),
                    spice_level: "Medium".into(),
                    quantity: 100,
                    allergens: "Dairy".into(),
                },
                MenuItem {
                    name: "Chaat".into(),
                    diet: "Vegetarian".into(),
                    spice_level: "Mild".into(),
                    quantity: 100,
                    allergens: "Gluten".into(),
                },
            ],
            caterer: "Caterer".into(),
            estimated_cost: 50_000.0,
        },
        MenuEntry {
            id: 2,
            event: "Sangeet".into(),
            meal_type: "Dinner".into(),
            items: vec![
                MenuItem {
                    name: "Butter Chicken".into(),
                    diet: "Non-Veg".into(),
                    spice_level: "Medium".into(),
                    quantity: 80,
                    allergens: "Dairy".into(),
                },
                MenuItem {
                    name: "Dal Makhani".into(),
                    diet: "Vegetarian".into(),
                    spice_level: "Mild".into(),
                    quantity: 120,
                    allergens: "Dairy".into(),
                },
            ],
            caterer: "Caterer".into(),
            estimated_cost: 80_000.0,
        },
        MenuEntry {
            id: 3,
            event: "Wedding Ceremony".into(),
            meal_type: "Lunch".into(),
            items: vec![
                MenuItem {
                    name: "Paneer Butter Masala".into(),
                    diet: "Vegetarian".into(),
                    spice_level: "Mild".into(),
                    quantity: 200,
                    allergens: "Dairy".into(),
                },
                MenuItem {
                    name: "Naan".into(),
                    diet: "Vegetarian".into(),
                    spice_level: "None".into(),
                    quantity: 300,
                    allergens: "Gluten".into(),
                },
            ],
            caterer: "Caterer".into(),
            estimated_cost: 120_000.0,
        },
        MenuEntry {
            id: 4,
            event: "Reception".into(),
            meal_type: "Dinner".into(),
            items: vec![
                MenuItem {
                    name: "Mix Grill".into(),
                    diet: "Non-Veg".into(),
                    spice_level: "High".into(),
                    quantity: 100,
                    allergens: "None".into(),
                },
                MenuItem {
                    name: "Veg Biryani".into(),
                    diet: "Vegetarian".into(),
                    spice_level: "Medium".into(),
                    quantity: 150,
                    allergens: "None".into(),
                },
            ],
            caterer: "Caterer".into(),
            estimated_cost: 100_000.0,
        },
    ]
}

fn starter_family() -> Vec<FamilyMember> {
    vec![
        FamilyMember {
            id: 1,
            name: "Raj Agarwal".into(),
            role: "Groom".into(),
            relation: "Son".into(),
            photo: String::new(),
            group: "Agarwal".into(),
        },
        FamilyMember {
            id: 2,
            name: "Sunita Agarwal".into(),
            role: "Bride".into(),
            relation: "Daughter".into(),
            photo: String::new(),
            group: "Agarwal".into(),
        },
    ]
}

fn starter_transport() -> Vec<TransportRecord> {
    vec![
        TransportRecord {
            id: 1,
            mode: "Bus".into(),
            details: "Delhi to Hanumangarh".into(),
            group: "Groom's Side".into(),
            date: "2025-11-27".into(),
            time: "08:00".into(),
            pickup_location: "Delhi Central".into(),
            drop_location: "Hanumangarh".into(),
            capacity: 50,
            booked: 35,
        },
        TransportRecord {
            id: 2,
            mode: "Train".into(),
            details: "Hanumangarh to Delhi".into(),
            group: "Bride's Side".into(),
            date: "2025-12-01".into(),
            time: "14:00".into(),
            pickup_location: "Hanumangarh Station".into(),
            drop_location: "Delhi".into(),
            capacity: 100,
            booked: 75,
        },
    ]
}

fn starter_staff() -> Vec<StaffMember> {
    vec![
        StaffMember {
            id: 1,
            name: "Rajesh Kumar".into(),
            category: "Coordinator".into(),
            contact: "9999100001".into(),
            events: vec![
                "Mehendi".into(),
                "Sangeet".into(),
                "Wedding Ceremony".into(),
            ],
            shift: "Full Day".into(),
            payment: 15_000.0,
            paid: false,
            notes: "Main coordinator".into(),
        },
        StaffMember {
            id: 2,
            name: "Photo Team".into(),
            category: "Photographer".into(),
            contact: "9999100002".into(),
            events: vec!["Wedding Ceremony".into(), "Reception".into()],
            shift: "Event Hours".into(),
            payment: 120_000.0,
            paid: false,
            notes: "2 photographers, 1 videographer".into(),
        },
        StaffMember {
            id: 3,
            name: "DJ Amit".into(),
            category: "DJ".into(),
            contact: "9999100003".into(),
            events: vec!["Sangeet".into(), "Reception".into()],
            shift: "Evening".into(),
            payment: 80_000.0,
            paid: false,
            notes: "Bollywood specialist".into(),
        },
    ]
}

fn starter_gifts() -> Vec<Gift> {
    vec![
        Gift::Received(ReceivedGift {
            id: 1,
            from: "Raj Agarwal".into(),
            item: "Gold Chain".into(),
            value: 50_000.0,
            received_date: "2025-11-30".into(),
            thank_you_sent: false,
            notes: String::new(),
        }),
        Gift::Return(ReturnGift {
            id: 2,
            item: "Dry Fruit Box".into(),
            quantity: 150,
            cost_per_unit: 500.0,
            total_cost: 75_000.0,
            ordered: true,
            delivered: false,
            notes: "Premium packaging".into(),
        }),
    ]
}

fn starter_return_money() -> Vec<PaymentRecord> {
    vec![
        PaymentRecord {
            id: 1,
            vendor: "Decorator".into(),
            category: "Decoration".into(),
            amount_given: 180_000.0,
            advance: 50_000.0,
            final_payment: 130_000.0,
            balance_due: 130_000.0,
            due_date: "2025-11-25".into(),
            paid: false,
            payment_date: None,
            notes: "Balance due before event".into(),
        },
        PaymentRecord {
            id: 2,
            vendor: "Caterer".into(),
            category: "Catering".into(),
            amount_given: 350_000.0,
            advance: 100_000.0,
            final_payment: 250_000.0,
            balance_due: 0.0,
            due_date: "2025-11-30".into(),
            paid: true,
            payment_date: Some("2025-11-01".into()),
            notes: "Fully paid".into(),
        },
        PaymentRecord {
            id: 3,
            vendor: "Photographer".into(),
            category: "Photography".into(),
            amount_given: 120_000.0,
            advance: 40_000.0,
            final_payment: 80_000.0,
            balance_due: 80_000.0,
            due_date: "2025-12-15".into(),
            paid: false,
            payment_date: None,
            notes: "Final payment after delivery".into(),
        },
    ]
}
