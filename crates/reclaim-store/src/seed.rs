//! Demo listing shown before any real reports exist. These are the four
//! sample reports from the original portal; none has an owning account, so
//! any authenticated user may manage them.

use chrono::Utc;
use uuid::Uuid;

use reclaim_types::models::{Item, ItemStatus};

use crate::Store;

impl Store {
    /// Insert the demo reports. Called explicitly from the process entry
    /// point, never as a constructor side effect.
    pub fn seed_demo_items(&self) {
        let seeds = [
            (
                "Blue Hydro Flask",
                "Bottles",
                ItemStatus::Lost,
                "ELT",
                "May 15, 2025",
                "https://images.unsplash.com/photo-1602143399435-09ce15277813?q=80&w=800&auto=format&fit=crop",
                "32oz wide mouth bottle with a few stickers on it. Left it on the second row during Chem 101.",
                "John Doe",
                "john@example.com",
            ),
            (
                "Calculus Textbook",
                "Books",
                ItemStatus::Found,
                "Campus Field",
                "May 14, 2025",
                "https://images.unsplash.com/photo-1544947950-fa07a98d237f?q=80&w=800&auto=format&fit=crop",
                "Early Transcendentals, 8th Edition. Found on a bench near the fountain.",
                "Jane Smith",
                "jane@example.com",
            ),
            (
                "Black North Face Backpack",
                "Bags",
                ItemStatus::Lost,
                "Downtown",
                "May 16, 2025",
                "https://images.unsplash.com/photo-1553062407-98eeb64c6a62?q=80&w=800&auto=format&fit=crop",
                "Contains a laptop and gym clothes. Black with white logo.",
                "Mike Ross",
                "mike@example.com",
            ),
            (
                "Car Keys",
                "Accessories",
                ItemStatus::Found,
                "Adenuga building",
                "May 16, 2025",
                "https://images.unsplash.com/photo-1582139329536-e7284fece509?q=80&w=800&auto=format&fit=crop",
                "Toyota key fob with a red lanyard.",
                "Security Desk",
                "security@bells.edu",
            ),
        ];

        let mut items = self.items.lock();
        for (name, category, status, location, date, image, description, reporter, contact) in seeds
        {
            let item = Item {
                id: Uuid::new_v4(),
                name: name.to_string(),
                category: category.to_string(),
                status,
                location: location.to_string(),
                date: date.to_string(),
                image: Some(image.to_string()),
                description: description.to_string(),
                reporter_name: reporter.to_string(),
                reporter_contact: contact.to_string(),
                reporter_id: None,
                claimed_at: None,
                holder_info: None,
                created_at: Utc::now(),
            };
            items.insert(item.id, item);
        }
    }
}
