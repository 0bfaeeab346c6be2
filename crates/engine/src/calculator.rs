//! Calculation entry point and result assembly.

use crate::{individual, mixed};
use cargofit_core::{
    convert, CalculationResult, Config, Container, ContainerSnapshot, Item, LengthUnit, Mode,
    Outcome, Result,
};

/// Stateless packing calculator.
///
/// Each [`calculate`](Calculator::calculate) call is a pure function
/// of the input snapshot: nothing persists between invocations, and a
/// new result replaces the previous one wholesale on the caller's
/// side. Re-running identical input yields an identical result.
pub struct Calculator {
    config: Config,
}

impl Calculator {
    /// Creates a calculator with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Creates a calculator with default configuration.
    pub fn default_config() -> Self {
        Self::new(Config::default())
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs one packing calculation.
    ///
    /// An empty item set is a no-op and yields `Ok(None)`; otherwise
    /// the container, items, and configuration are validated, all
    /// dimensions are normalized to centimeters, the margin is
    /// applied (usable axes floored at zero), and the mode-specific
    /// calculator runs against the usable volume.
    pub fn calculate(
        &self,
        items: &[Item],
        container: &Container,
    ) -> Result<Option<CalculationResult>> {
        if items.is_empty() {
            return Ok(None);
        }

        self.config.validate()?;
        container.validate()?;
        for item in items {
            item.validate()?;
        }

        let margin_cm = convert(
            self.config.effective_margin(),
            container.unit(),
            LengthUnit::Centimeter,
        );
        let usable_cm = container.usable_dims_cm(margin_cm);
        let container_volume = usable_cm.x * usable_cm.y * usable_cm.z;

        log::debug!(
            "calculating {:?} packing for {} item(s), usable {}x{}x{} cm",
            self.config.mode,
            items.len(),
            usable_cm.x,
            usable_cm.y,
            usable_cm.z,
        );

        let outcome = match self.config.mode {
            Mode::Individual => Outcome::Individual(individual::calculate(
                items,
                &usable_cm,
                self.config.shipment_qty,
            )),
            Mode::Mixed => {
                Outcome::Mixed(mixed::calculate(items, &usable_cm, self.config.priority))
            }
        };

        Ok(Some(CalculationResult {
            container: ContainerSnapshot {
                dims: *container.dims(),
                unit: container.unit(),
                usable_cm,
                kind: container.kind(),
            },
            container_volume,
            outcome,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cargofit_core::Priority;

    fn container() -> Container {
        Container::new(120.0, 100.0, 150.0)
    }

    #[test]
    fn test_empty_items_is_noop() {
        let calc = Calculator::default_config();
        let result = calc.calculate(&[], &container()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_invalid_container_rejected() {
        let calc = Calculator::default_config();
        let items = vec![Item::new("B1", 10.0, 10.0, 10.0)];
        let bad = Container::new(0.0, 100.0, 150.0);
        assert!(calc.calculate(&items, &bad).is_err());
    }

    #[test]
    fn test_invalid_item_rejected() {
        let calc = Calculator::default_config();
        let items = vec![Item::new("B1", -1.0, 10.0, 10.0)];
        assert!(calc.calculate(&items, &container()).is_err());
    }

    #[test]
    fn test_margin_shrinks_usable_volume() {
        let calc = Calculator::new(Config::new().with_margin(5.0));
        let items = vec![Item::new("B1", 30.0, 20.0, 15.0)];
        let result = calc.calculate(&items, &container()).unwrap().unwrap();

        // Usable 110 x 90 x 140: floor(110/30)=3, floor(90/20)=4,
        // floor(140/15)=9 for the identity; rotation does better, but
        // the usable snapshot itself must reflect the margin.
        assert_relative_eq!(result.container.usable_cm.x, 110.0);
        assert_relative_eq!(result.container.usable_cm.y, 90.0);
        assert_relative_eq!(result.container.usable_cm.z, 140.0);
        assert_relative_eq!(result.container_volume, 110.0 * 90.0 * 140.0);
    }

    #[test]
    fn test_oversized_margin_yields_all_zero_result() {
        let calc = Calculator::new(Config::new().with_margin(60.0));
        let items = vec![Item::new("B1", 30.0, 20.0, 15.0)];
        let result = calc.calculate(&items, &container()).unwrap().unwrap();

        assert_eq!(result.total_items(), 0);
        assert_relative_eq!(result.container.usable_cm.x, 0.0);
    }

    #[test]
    fn test_margin_converted_from_container_unit() {
        // 1 in margin on a 50x40x30 in container: usable of 48 in in cm.
        let calc = Calculator::new(Config::new().with_margin(1.0));
        let container = Container::new(50.0, 40.0, 30.0).with_unit(LengthUnit::Inch);
        let items = vec![Item::new("B1", 10.0, 10.0, 10.0)];
        let result = calc.calculate(&items, &container).unwrap().unwrap();

        assert_relative_eq!(result.container.usable_cm.x, 121.92); // 48 in
        assert_eq!(result.container.unit, LengthUnit::Inch);
        assert_relative_eq!(result.container.dims.x, 50.0);
    }

    #[test]
    fn test_idempotent() {
        let calc = Calculator::new(
            Config::new()
                .with_mode(Mode::Mixed)
                .with_priority(Priority::Volume)
                .with_margin(2.0),
        );
        let items = vec![
            Item::new("A", 30.0, 20.0, 15.0).with_quantity(40),
            Item::new("B", 25.0, 25.0, 20.0),
        ];

        let first = calc.calculate(&items, &container()).unwrap().unwrap();
        let second = calc.calculate(&items, &container()).unwrap().unwrap();

        assert_eq!(first.total_items(), second.total_items());
        assert_eq!(first.efficiency_percent(), second.efficiency_percent());
        let (Outcome::Mixed(a), Outcome::Mixed(b)) = (&first.outcome, &second.outcome) else {
            unreachable!()
        };
        assert_eq!(a.allocations.len(), b.allocations.len());
        assert_relative_eq!(a.unused_height, b.unused_height);
    }

    #[test]
    fn test_mode_dispatch() {
        let items = vec![Item::new("B1", 30.0, 20.0, 15.0)];

        let individual = Calculator::default_config()
            .calculate(&items, &container())
            .unwrap()
            .unwrap();
        assert_eq!(individual.mode(), Mode::Individual);

        let mixed = Calculator::new(Config::new().with_mode(Mode::Mixed))
            .calculate(&items, &container())
            .unwrap()
            .unwrap();
        assert_eq!(mixed.mode(), Mode::Mixed);
    }
}
