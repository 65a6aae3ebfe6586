use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdChefHat, LdCirclePlus, LdClipboardList, LdDumbbell, LdLayoutDashboard, LdList,
    LdPartyPopper, LdScissors, LdShoppingBag, LdShoppingCart, LdTicket, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::NavIcon;

/// Lucide icon for a menu entry or dashboard shortcut.
pub fn nav_icon(icon: NavIcon, size: u32) -> Element {
    match icon {
        NavIcon::LayoutDashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: size, height: size } },
        NavIcon::ShoppingCart => rsx! { Icon::<LdShoppingCart> { icon: LdShoppingCart, width: size, height: size } },
        NavIcon::ShoppingBag => rsx! { Icon::<LdShoppingBag> { icon: LdShoppingBag, width: size, height: size } },
        NavIcon::Ticket => rsx! { Icon::<LdTicket> { icon: LdTicket, width: size, height: size } },
        NavIcon::Scissors => rsx! { Icon::<LdScissors> { icon: LdScissors, width: size, height: size } },
        NavIcon::Dumbbell => rsx! { Icon::<LdDumbbell> { icon: LdDumbbell, width: size, height: size } },
        NavIcon::PartyPopper => rsx! { Icon::<LdPartyPopper> { icon: LdPartyPopper, width: size, height: size } },
        NavIcon::PlusCircle => rsx! { Icon::<LdCirclePlus> { icon: LdCirclePlus, width: size, height: size } },
        NavIcon::List => rsx! { Icon::<LdList> { icon: LdList, width: size, height: size } },
        NavIcon::Users => rsx! { Icon::<LdUsers> { icon: LdUsers, width: size, height: size } },
        NavIcon::ChefHat => rsx! { Icon::<LdChefHat> { icon: LdChefHat, width: size, height: size } },
        NavIcon::ClipboardList => rsx! { Icon::<LdClipboardList> { icon: LdClipboardList, width: size, height: size } },
    }
}
