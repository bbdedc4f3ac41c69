use glam::IVec2;

const INITIAL_MONEY: i32 = 1000;
const MAX_ENERGY: i32 = 100;
const ENERGY_COST: i32 = 10;

pub struct Player {
    pub position: IVec2,
    pub rock_hammer: bool,
    money: i32,
    energy: i32,
}

impl Player {
    pub fn new(position: IVec2) -> Self {
        Player {
            position,
            rock_hammer: false,
            money: INITIAL_MONEY,
            energy: MAX_ENERGY,
        }
    }

    pub fn money(&self) -> i32 {
        self.money
    }

    pub fn receive_money(&mut self, amount: i32) {
        self.money += amount;
    }

    pub fn pay_money(&mut self, amount: i32) {
        self.money -= amount;
    }

    pub fn energy(&self) -> i32 {
        self.energy
    }

    /// Buys energy back at [`ENERGY_COST`] money per point, limited by funds
    /// and the energy cap.
    pub fn refill_energy(&mut self) {
        let deficit = MAX_ENERGY - self.energy;
        let bought = deficit.min(self.money / ENERGY_COST).max(0);
        self.energy += bought;
        self.money -= bought * ENERGY_COST;
    }

    /// Spends `amount` energy if available; returns whether it was spent.
    pub fn use_energy(&mut self, amount: i32) -> bool {
        let ok = self.energy >= amount;
        if ok {
            self.energy -= amount;
        }
        ok
    }

    pub fn is_dead(&self) -> bool {
        self.money < 0 || self.energy < 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        Player::new(IVec2::new(3, 4))
    }

    #[test]
    fn starts_solvent() {
        let p = player();
        assert_eq!(p.position, IVec2::new(3, 4));
        assert_eq!(p.money(), 1000);
        assert_eq!(p.energy(), 100);
        assert!(!p.rock_hammer);
        assert!(!p.is_dead());
    }

    #[test]
    fn money_flow() {
        let mut p = player();
        p.receive_money(42);
        assert_eq!(p.money(), 1042);

        p.pay_money(p.money());
        assert_eq!(p.money(), 0);
        assert!(!p.is_dead());

        // Going into debt is lethal.
        p.pay_money(1);
        assert_eq!(p.money(), -1);
        assert!(p.is_dead());
    }

    #[test]
    fn energy_is_never_overdrawn() {
        let mut p = player();
        assert!(p.use_energy(60));
        assert_eq!(p.energy(), 40);

        assert!(!p.use_energy(41));
        assert_eq!(p.energy(), 40);

        assert!(p.use_energy(40));
        assert_eq!(p.energy(), 0);
        assert!(!p.is_dead());
    }

    #[test]
    fn refill_is_limited_by_funds_and_cap() {
        let mut p = player();

        // 1000 money buys back exactly a full tank.
        assert!(p.use_energy(100));
        p.refill_energy();
        assert_eq!(p.energy(), 100);
        assert_eq!(p.money(), 0);

        // Broke players buy nothing.
        assert!(p.use_energy(50));
        p.refill_energy();
        assert_eq!(p.energy(), 50);

        // Partial funds buy a partial refill.
        p.receive_money(30);
        p.refill_energy();
        assert_eq!(p.energy(), 53);
        assert_eq!(p.money(), 0);
    }
}
