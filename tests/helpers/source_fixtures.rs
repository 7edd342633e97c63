//! Common VHDL fixtures for tests.

/// One entity with documented ports and generics, one of them grouped.
pub const UART_ENTITY: &str = r#"
library ieee;
use ieee.std_logic_1164.all;

-- Minimal UART transmitter.
--
-- Sends one byte per request.
entity uart_tx is
    generic (
        -- Clock cycles per bit.
        BAUD_DIV : positive := 868;
        PARITY : boolean -- Append an even parity bit.
    );
    port (
        -- ==========
        -- Clocking
        -- Clock and synchronous reset.
        -- ==========
        -- System clock.
        clk : in std_logic;
        rst : in std_logic; -- Active high.
        -- ==========
        -- Data
        -- ==========
        -- Byte to send.
        data : in std_logic_vector(7 downto 0);
        tx : out std_logic := '1'
    );
end entity uart_tx;

architecture rtl of uart_tx is
    -- Bits per frame.
    constant FRAME_BITS : natural := 10;
begin
end architecture rtl;
"#;

/// A package with types, constants and overloaded functions.
pub const UTIL_PACKAGE: &str = r#"
-- Shared helpers.
package util is
    -- Bus transfer.
    type xfer_t is record
        -- Target address.
        addr : unsigned(15 downto 0);
        -- Payload.
        data : std_logic_vector(31 downto 0);
    end record;

    -- Controller state.
    type state_t is (
        IDLE, -- Waiting for work.
        BUSY,
        DONE
    );

    -- A byte.
    subtype byte_t is std_logic_vector(7 downto 0);

    -- Default timeout in cycles.
    constant TIMEOUT : natural := 100;

    -- Add two unsigned values.
    function add(a, b : unsigned) return unsigned;
    -- Add two integers.
    function add(a, b : integer) return integer;

    -- Nested helpers.
    package inner is
    end package inner;
end package util;

package body util is
    constant PRIVATE : natural := 1;
end package body util;
"#;
