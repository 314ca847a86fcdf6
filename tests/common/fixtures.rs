//! Literal puzzle inputs and their expected outputs.
//!
//! Inputs keep their quirks on purpose: trailing spaces in the duck log,
//! indented continuation lines on the diary page, curly apostrophes in the
//! lyrics.

// ---------------------------------------------------------------------------
// Acertijo 1
// ---------------------------------------------------------------------------

pub const PATO_LOG: &str = "11:10 1 Pato comió un poco de \"Sonrisa dulce\"
11:25 3 Pato rompió un sueter de Mabel
11:33 4 Pato se dirigió a los charcos de barro
12:01 5 Pato se resbaló en el barro
12:10 7 Pato se limpió las pezuñas
12:31 3 Pato se comió un album de \"Varias veces\"
12:33 5 Pato masticó los lentes de Standford
12:41 7 Pato se resbaló en el agua
12:44 6 Pato se ensució las pezuñas con pelo de multioso
12:51 7 Pato se limpió las pezuñas
13:00 5 Pato masticó la la gorra de Soos
13:21 4 Pato se acostó a dormir siesta
14:25 7 Pato se resbaló en el barro\x20\x20\x20\x20\x20\x20\x20\x20
14:40 6 Pato tomó agua
14:51 4 Pato comió un poco de \"Sonrisa dulce\"
15:01 7 Pato mordió la gorra de Dipper";

pub const PATO_CAPTURE: &str = "Hora indicada para capturar a Pato: 12:51";

/// Never accumulates 30 within an hour.
pub const PATO_LOG_CALM: &str = "09:00 9 Pato desayunó
09:30 9 Pato durmió
09:59 9 Pato bostezó
10:45 9 Pato nadó
11:50 9 Pato comió";

// ---------------------------------------------------------------------------
// Acertijo 2
// ---------------------------------------------------------------------------

pub const CANCIONES: &str = "Sev’ral Timez
Chica, me tienes tan locooo, loco, loco (cray, cray)
Como me dices que no seras mi bebe
NO estamos amenazando, bebe
Alla vamos amor no volaras conmigo
Tom4 mi m4n0 es el destino
Mabel, solo toma mi mano, puede ser para siempre
no necesitamos a nadie, si permanecemos juntos
Eres el cielo chica, vamos a volar
Ja, mira mis grandes ojos azules
Otra como tu no hay Mabel
Sev’ral Timez did it";

pub const VENGANZA: &str = "zXmXT lXr’vXS
CXmX mX dXcXs qXX nX sXrXs mX bXbX
AllX vXmXs XmXr nX vXlXrXs cXnmXgX
MXbXl, sXlX tXmX mX mXnX, pXXdX sXr pXrX sXXmprX
ErXs Xl cXXlX chXcX, vXmXs X vXlXr
JX, mXrX mXs grXndXs XjXs XzXlXs
OtrX cXmX tX nX hXy MXbXl
tX dXd zXmXT lXr’vXS";

// ---------------------------------------------------------------------------
// Acertijo 3
// ---------------------------------------------------------------------------

pub const INFRACTORES: &str = "Blendin Blandin, 02/04/2020, 35
Soos Ramirez, 12/08/2020, 12
Soos Ramirez, 12/08/2021, 11
Blendin Blandin, 02/04/2021, 26
Stan Pines, 24/01/2020, 8
John Doe, 24/01/2020, 130
Stan Pines, 24/01/2021, 11";

pub const INFRACTORES_YEARLY: &str = "Stan Pines, 24/01/2020, 8
Soos Ramirez, 12/08/2020, 12
Blendin Blandin, 02/04/2020, 35
Stan Pines, 24/01/2021, 11
Soos Ramirez, 12/08/2021, 11
Blendin Blandin, 02/04/2021, 26";

pub const INFRACTORES_HISTORIC: &str = "Stan Pines, 24/01/2020, 8
Stan Pines, 24/01/2021, 11
Soos Ramirez, 12/08/2021, 11";

pub const LEDGER_NUMERIC_KEYS: &str = "2024, 11/02/2023, 35
2025, 11/03/2023, 30
2025, 11/03/2023, 50
2025, 11/02/2023, 40
Pepito, 11/02/2023, 123
2025, 11/03/2020, 33
2025, 11/03/2022, 1";

pub const LEDGER_NUMERIC_KEYS_YEARLY: &str = "2025, 11/03/2020, 33
2025, 11/03/2022, 1
2025, 11/03/2023, 30
2024, 11/02/2023, 35
2025, 11/02/2023, 40";

pub const LEDGER_NUMERIC_KEYS_HISTORIC: &str = "2025, 11/03/2022, 1
2025, 11/03/2023, 30
2025, 11/03/2020, 33";

// ---------------------------------------------------------------------------
// Acertijo 4
// ---------------------------------------------------------------------------

pub const PAPIRO: &str = "1@5C%&*u*&E@!125&V*@#$a
@#!S$%&e#24%1C*$!@r$%#E!@!#t&%!@A#@!@
!#@P$%$!o%%&*C$@!@#o!@#$@!s!@#$!@
!$@M#$%#@E@#$%#t@!@%r@!@@o@!!@$s%$&*!@";

pub const PAPIRO_MENSAJE: &str = "doblarizquierdadespuesderecha";

pub const PAPIRO_SYMBOLS: &str = "!@#$ %^&* ()_+
^%$# !@#$ %^&*
+_)( *&^% $#!@
!@#$ ^&*() %^&*";

// ---------------------------------------------------------------------------
// Acertijo 5
// ---------------------------------------------------------------------------

pub const DIARIO: &str = "En el pueblo de Gravity Falls, el misterio es la esencia principal.
Todos los rincones de la ciudad ocultan secretos que traen nuevos misterios que los
hermanos pines deben resolver.
El bosque que rodea el pueblo esta repleto de criaturas extrañas y de fenómenos que
nadie puede explicar. La \"Tienda de curiosidades\" del tío Pines también muestra esa
esencia tenebrosa y misteriosa de Gravity Falls. Incluso sus habitantes tienen su
    lado
enigmatico, que contribuye a la atmósfera de puro misterio: Gideon, Stan, el Gnomo
    Rey
y muchos más. A lo largo que transcurre el verano, van resolviendo todos aquellos
misterios de la ciudad con la ayuda del diario número 3 y sus amigos";

pub const DIARIO_SHORT: &str = "misterioso misterio misterio
asmisterio admisterios misterio";

// ---------------------------------------------------------------------------
// Acertijo 6
// ---------------------------------------------------------------------------

pub const PARED: &str = "TbrA8X8FvnjhX9th773QWSXdWcYBUD
0808E8JQb3TABFCKHEWf1zy3UXZZ53
99999080118082280808228080aHh4
99080900110082208080220808aSds
99999008118082280008228800akmg
99080900110082200808228800aKgT
99999000118082222228222222aPX3
08080808080808080808800808wqXa
T3QPXvnc07cUrTKYRFl86HUOLgw6WE";

pub const PARED_CODIGO: &str = "TbrA_X_FvnjhXXth773QWSXdWcYBUD
____E_JQb3TABFCKHEWfXzy3UXZZ53
XXXXX___XX___XX_____XX____aHh4
XX___X__XX___XX_____XX____aSds
XXXXX___XX___XX_____XX____akmg
XX___X__XX___XX_____XX____aKgT
XXXXX___XX___XXXXXX_XXXXXXaPX3
__________________________wqXa
T3QPXvnc_7cUrTKYRFl_6HUOLgw6WE";

// ---------------------------------------------------------------------------
// Output file states before a run
// ---------------------------------------------------------------------------

/// Absent, empty, and stale output files.
pub const PRE_CONTENTS: &[Option<&str>] = &[None, Some(""), Some("giberishsaldas\nlsda")];
