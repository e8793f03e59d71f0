//! UI string table for the three supported languages.
//!
//! Keys are an enum and every language is matched exhaustively, so a missing
//! translation is a compile error rather than a runtime fallback.

use crate::types::{Category, CategoryFilter, Language};

/// Every translatable UI string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranslationKey {
    Menu,
    AllItems,
    Coffee,
    Food,
    Salad,
    Beverage,
    Pastry,
    SetMeal,
    AddToCart,
    Cart,
    Back,
    Quantity,
    OrderConfirmed,
    Total,
    Checkout,
    Language,
    Empty,
    Description,
    Price,
    Vegetarian,
    OrderHistory,
    Reorder,
    NoItemsInCategory,
    SentToKitchen,
    OrderNumber,
    ContinueOrdering,
}

impl TranslationKey {
    /// The filter-bar label for a category.
    #[must_use]
    pub const fn for_category(category: Category) -> Self {
        match category {
            Category::Coffee => Self::Coffee,
            Category::Food => Self::Food,
            Category::Salad => Self::Salad,
            Category::Beverage => Self::Beverage,
            Category::Pastry => Self::Pastry,
            Category::SetMeal => Self::SetMeal,
        }
    }

    /// The filter-bar label for a filter, `AllItems` for the unfiltered view.
    #[must_use]
    pub const fn for_filter(filter: CategoryFilter) -> Self {
        match filter {
            CategoryFilter::All => Self::AllItems,
            CategoryFilter::Only(category) => Self::for_category(category),
        }
    }
}

/// Look up the localized string for `key`.
#[must_use]
pub const fn translate(language: Language, key: TranslationKey) -> &'static str {
    match language {
        Language::En => english(key),
        Language::Ja => japanese(key),
        Language::Th => thai(key),
    }
}

const fn english(key: TranslationKey) -> &'static str {
    use TranslationKey as K;
    match key {
        K::Menu => "Menu",
        K::AllItems => "All",
        K::Coffee => "Coffee",
        K::Food => "Food",
        K::Salad => "Salad",
        K::Beverage => "Beverage",
        K::Pastry => "Pastry",
        K::SetMeal => "Set Meal",
        K::AddToCart => "Add to Cart",
        K::Cart => "Cart",
        K::Back => "Back",
        K::Quantity => "Quantity",
        K::OrderConfirmed => "Order Confirmed!",
        K::Total => "Total",
        K::Checkout => "Checkout",
        K::Language => "Language",
        K::Empty => "Empty",
        K::Description => "Description",
        K::Price => "Price",
        K::Vegetarian => "Vegetarian",
        K::OrderHistory => "Order History",
        K::Reorder => "Re-order",
        K::NoItemsInCategory => "No items in this category",
        K::SentToKitchen => "Your order has been sent to the kitchen",
        K::OrderNumber => "Order ID",
        K::ContinueOrdering => "Continue Ordering",
    }
}

const fn japanese(key: TranslationKey) -> &'static str {
    use TranslationKey as K;
    match key {
        K::Menu => "メニュー",
        K::AllItems => "すべて",
        K::Coffee => "コーヒー",
        K::Food => "フード",
        K::Salad => "サラダ",
        K::Beverage => "ドリンク",
        K::Pastry => "ペストリー",
        K::SetMeal => "セットメニュー",
        K::AddToCart => "カートに追加",
        K::Cart => "カート",
        K::Back => "戻る",
        K::Quantity => "数量",
        K::OrderConfirmed => "ご注文ありがとうございます！",
        K::Total => "合計",
        K::Checkout => "チェックアウト",
        K::Language => "言語",
        K::Empty => "空です",
        K::Description => "説明",
        K::Price => "価格",
        K::Vegetarian => "ベジタリアン",
        K::OrderHistory => "注文履歴",
        K::Reorder => "再注文",
        K::NoItemsInCategory => "このカテゴリーには商品がありません",
        K::SentToKitchen => "ご注文はキッチンに送信されました",
        K::OrderNumber => "注文番号",
        K::ContinueOrdering => "注文を続ける",
    }
}

const fn thai(key: TranslationKey) -> &'static str {
    use TranslationKey as K;
    match key {
        K::Menu => "เมนู",
        K::AllItems => "ทั้งหมด",
        K::Coffee => "กาแฟ",
        K::Food => "อาหาร",
        K::Salad => "สลัด",
        K::Beverage => "เครื่องดื่ม",
        K::Pastry => "ขนมปัง",
        K::SetMeal => "เมนูชุด",
        K::AddToCart => "เพิ่มลงในรถเข็น",
        K::Cart => "รถเข็น",
        K::Back => "กลับ",
        K::Quantity => "จำนวน",
        K::OrderConfirmed => "ยืนยันคำสั่งซื้อแล้ว!",
        K::Total => "รวม",
        K::Checkout => "ชำระเงิน",
        K::Language => "ภาษา",
        K::Empty => "ว่าง",
        K::Description => "คำอธิบาย",
        K::Price => "ราคา",
        K::Vegetarian => "เจ",
        K::OrderHistory => "ประวัติการสั่งซื้อ",
        K::Reorder => "สั่งซื้อใหม่",
        K::NoItemsInCategory => "ไม่มีรายการในหมวดหมู่นี้",
        K::SentToKitchen => "คำสั่งซื้อของคุณถูกส่งไปที่ครัวแล้ว",
        K::OrderNumber => "หมายเลขคำสั่งซื้อ",
        K::ContinueOrdering => "สั่งอาหารต่อ",
    }
}
